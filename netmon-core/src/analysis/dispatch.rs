use crate::analysis::correlation::{RttCorrelations, correlate_signal_vs_rtt};
use crate::analysis::describe::{Summary, describe};
use crate::analysis::error::AnalysisError;
use crate::analysis::hourly::{HourlyMeans, hourly_mean_rtt};
use crate::analysis::instability::{PeakHours, peak_hours};
use crate::analysis::recovery::{RecoveryReport, RecoveryRule, recovery_time};
use crate::dataset::{Dataset, OVERALL, Partitions};
use crate::ingest::types::Sample;
use serde::Serialize;

/// One case per operation a front end can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Show,
    Describe,
    Correlate,
    Hourly,
    Peaks,
    Recovery { threshold_pct: u32, rule: RecoveryRule },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Show => "show",
            Command::Describe => "describe",
            Command::Correlate => "correlate",
            Command::Hourly => "hourly",
            Command::Peaks => "peaks",
            Command::Recovery { .. } => "recovery",
        }
    }

    fn run(&self, dataset: &Dataset) -> Result<Output, AnalysisError> {
        match *self {
            Command::Show => Ok(Output::Samples(dataset.samples().to_vec())),
            Command::Describe => describe(dataset).map(Output::Summary),
            Command::Correlate => correlate_signal_vs_rtt(dataset).map(Output::Correlations),
            Command::Hourly => hourly_mean_rtt(dataset).map(Output::Hourly),
            Command::Peaks => peak_hours(dataset).map(Output::Peaks),
            Command::Recovery {
                threshold_pct,
                rule,
            } => recovery_time(dataset, threshold_pct, rule).map(Output::Recovery),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Output {
    Samples(Vec<Sample>),
    Summary(Summary),
    Correlations(RttCorrelations),
    Hourly(HourlyMeans),
    Peaks(PeakHours),
    Recovery(RecoveryReport),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PartitionResult {
    pub label: String,
    pub samples: usize,
    pub result: Result<Output, AnalysisError>,
}

/// Results of one command, one entry per partition in label order.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub command: Command,
    pub partitions: Vec<PartitionResult>,
}

impl Report {
    pub fn get(&self, label: &str) -> Option<&PartitionResult> {
        self.partitions.iter().find(|p| p.label == label)
    }

    pub fn succeeded(&self) -> usize {
        self.partitions.iter().filter(|p| p.result.is_ok()).count()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        let view = ReportJson {
            command: self.command.name(),
            partitions: self
                .partitions
                .iter()
                .map(|p| PartitionJson {
                    partition: &p.label,
                    samples: p.samples,
                    output: p.result.as_ref().ok(),
                    error: p.result.as_ref().err().map(ToString::to_string),
                })
                .collect(),
        };

        serde_json::to_string_pretty(&view)
    }
}

#[derive(Serialize)]
struct ReportJson<'a> {
    command: &'a str,
    partitions: Vec<PartitionJson<'a>>,
}

#[derive(Serialize)]
struct PartitionJson<'a> {
    partition: &'a str,
    samples: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<&'a Output>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Runs `command` over every partition. A failing partition does not stop the
/// others. With no partitions at all, analytic commands still report
/// [`AnalysisError::EmptyDataset`] rather than an empty success.
pub fn dispatch(command: &Command, partitions: &Partitions) -> Report {
    if partitions.is_empty() && *command != Command::Show {
        return Report {
            command: *command,
            partitions: vec![PartitionResult {
                label: OVERALL.to_string(),
                samples: 0,
                result: Err(AnalysisError::EmptyDataset),
            }],
        };
    }

    let partitions = partitions
        .iter()
        .map(|(label, dataset)| {
            tracing::debug!(
                command = command.name(),
                partition = %label,
                samples = dataset.len(),
                "running analysis"
            );
            PartitionResult {
                label: label.clone(),
                samples: dataset.len(),
                result: command.run(dataset),
            }
        })
        .collect();

    Report {
        command: *command,
        partitions,
    }
}
