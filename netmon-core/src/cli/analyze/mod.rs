mod render;

pub use render::render_report;

use crate::analysis::{Command, RecoveryRule, dispatch};
use crate::conf::{NetmonConfig, OutputFormat};
use crate::dataset::{PartitionMode, Partitions};
use crate::export::export_csv;
use crate::ingest::{IngestError, extract};
use clap::Args;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

/// Where to read samples from and how to group them.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Log file to analyse (overrides the config file)
    #[arg(long)]
    pub log: Option<PathBuf>,

    /// Earliest timestamp to include, "YYYY-MM-DD HH:MM:SS" (default: no lower bound)
    #[arg(long)]
    pub start: Option<String>,

    /// Latest timestamp to include, "YYYY-MM-DD HH:MM:SS" (default: now)
    #[arg(long)]
    pub end: Option<String>,

    /// Analyse each network separately
    #[arg(long, conflicts_with = "aggregate")]
    pub per_network: bool,

    /// Analyse all networks together
    #[arg(long)]
    pub aggregate: bool,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl SourceArgs {
    pub fn log_path<'a>(&'a self, cfg: &'a NetmonConfig) -> &'a Path {
        self.log.as_deref().unwrap_or(&cfg.log.path)
    }

    pub fn partition_mode(&self, cfg: &NetmonConfig) -> PartitionMode {
        if self.per_network {
            PartitionMode::PerNetwork
        } else if self.aggregate {
            PartitionMode::Aggregate
        } else {
            cfg.analysis.partition
        }
    }

    pub fn output_format(&self, cfg: &NetmonConfig) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            cfg.output.format
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct RecoveryArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Packet loss (%) at or above which a sample counts as failing
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    pub threshold: Option<u32>,

    /// Which earlier sample a recovering sample is compared against
    #[arg(long, value_enum)]
    pub rule: Option<RecoveryRule>,
}

impl RecoveryArgs {
    pub fn command(&self, cfg: &NetmonConfig) -> Command {
        Command::Recovery {
            threshold_pct: self.threshold.unwrap_or(cfg.analysis.recovery_threshold),
            rule: self.rule.unwrap_or(cfg.analysis.recovery_rule),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// CSV file to write
    #[arg(long, short)]
    pub output: PathBuf,
}

/// Extracts the log and splits it according to the session's partition mode.
pub fn load_partitions(source: &SourceArgs, cfg: &NetmonConfig) -> Result<Partitions, IngestError> {
    let extraction = extract(
        source.log_path(cfg),
        source.start.as_deref(),
        source.end.as_deref(),
    )?;

    Ok(extraction.dataset.partition(source.partition_mode(cfg)))
}

pub fn run_analysis(command: Command, source: &SourceArgs, cfg: &NetmonConfig) -> anyhow::Result<()> {
    let partitions = load_partitions(source, cfg)?;
    let report = dispatch(&command, &partitions);

    match source.output_format(cfg) {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Pretty => print!("{}", render_report(&report, io::stdout().is_terminal())),
    }

    if report.succeeded() == 0
        && let Some(err) = report.partitions.iter().find_map(|p| p.result.as_ref().err())
    {
        return Err(err.clone().into());
    }

    Ok(())
}

pub fn run_export(args: &ExportArgs, cfg: &NetmonConfig) -> anyhow::Result<()> {
    let partitions = load_partitions(&args.source, cfg)?;
    let rows = export_csv(&args.output, &partitions)?;

    println!("✔ Exported {rows} samples to {}", args.output.display());
    Ok(())
}
