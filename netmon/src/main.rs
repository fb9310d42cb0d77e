use clap::{Parser, Subcommand};
use netmon_core::analysis::Command as Analysis;
use netmon_core::cli::analyze::{ExportArgs, RecoveryArgs, SourceArgs, run_analysis, run_export};
use netmon_core::cli::{conf::ConfigCmd, error_hint};
use netmon_core::conf::{ConfigError, load_config};
use netmon_core::logging::{LogFormat, default_log_format, init_logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "netmon",
    version,
    about = "netmon: connection quality analysis for network monitor logs"
)]
struct Cli {
    /// Path to the netmon config file (default: ./netmon.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Diagnostic log format on stderr (default: human on a terminal, JSON otherwise)
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the retained samples
    Show(SourceArgs),

    /// Descriptive statistics for every numeric column
    Describe(SourceArgs),

    /// Correlation between signal strength and RTT
    Correlate(SourceArgs),

    /// Mean RTT per hour of day
    Hourly(SourceArgs),

    /// Hours with the worst RTT and the worst packet loss
    Peaks(SourceArgs),

    /// Mean time to recover after a packet loss failure
    Recovery(RecoveryArgs),

    /// Export the retained samples to CSV
    Export(ExportArgs),

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_format.unwrap_or_else(default_log_format));

    if let Err(err) = run(cli) {
        eprintln!("error: {err:#}");
        if let Some(hint) = error_hint(&err) {
            eprintln!();
            eprintln!("{hint}");
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cfg = || {
        let cfg = load_config(cli.config.as_deref())?;
        tracing::debug!(?cfg, "resolved configuration");
        Ok::<_, ConfigError>(cfg)
    };

    match cli.command {
        Command::Show(source) => run_analysis(Analysis::Show, &source, &cfg()?),
        Command::Describe(source) => run_analysis(Analysis::Describe, &source, &cfg()?),
        Command::Correlate(source) => run_analysis(Analysis::Correlate, &source, &cfg()?),
        Command::Hourly(source) => run_analysis(Analysis::Hourly, &source, &cfg()?),
        Command::Peaks(source) => run_analysis(Analysis::Peaks, &source, &cfg()?),
        Command::Recovery(args) => {
            let cfg = cfg()?;
            run_analysis(args.command(&cfg), &args.source, &cfg)
        }
        Command::Export(args) => run_export(&args, &cfg()?),
        Command::Config { cmd } => netmon_core::cli::conf::run(cmd),
    }
}
