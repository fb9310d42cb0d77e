use crate::analysis::RecoveryRule;
use crate::dataset::PartitionMode;
use crate::ingest::DEFAULT_LOG_PATH;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct NetmonConfig {
    pub log: LogConfig,
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Log file written by the monitor.
    pub path: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LOG_PATH),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    pub partition: PartitionMode,

    /// Packet loss percentage at or above which a sample counts as failing.
    pub recovery_threshold: u32,

    pub recovery_rule: RecoveryRule,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            partition: PartitionMode::Aggregate,
            recovery_threshold: 20,
            recovery_rule: RecoveryRule::Adjacent,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
}
