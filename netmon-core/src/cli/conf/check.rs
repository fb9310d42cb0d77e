use crate::conf::{ConfigError, load_config};
use std::path::PathBuf;

pub fn check(path: Option<PathBuf>) -> anyhow::Result<()> {
    let cfg = load_config(path.as_deref())?;

    println!("✔ Config loaded successfully");
    println!("✔ log file: {}", cfg.log.path.display());
    if !cfg.log.path.is_file() {
        println!("  (not readable yet: extraction will fail until the monitor has written it)");
    }
    println!("✔ partition mode: {:?}", cfg.analysis.partition);
    println!(
        "✔ recovery: threshold {}%, rule {:?}",
        cfg.analysis.recovery_threshold, cfg.analysis.recovery_rule
    );
    println!("✔ output format: {:?}", cfg.output.format);

    Ok(())
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::ReadFile { .. } => Some(
            "Create a config file with:\n\
             \n\
             netmon config init",
        ),

        ConfigError::AlreadyExists { .. } => Some(
            "Remove the existing file or pass a different path to `netmon config init`.",
        ),

        ConfigError::InvalidThreshold { .. } => Some(
            "The recovery threshold is a packet loss percentage.\n\
             \n\
             Example:\n\
             \n\
             [analysis]\n\
             recovery_threshold = 20",
        ),

        ConfigError::Parse { .. } => Some(
            "Valid values:\n\
             \n\
             analysis.partition     = \"aggregate\" | \"per-network\"\n\
             analysis.recovery_rule = \"adjacent\" | \"lagged\"\n\
             output.format          = \"pretty\" | \"json\"",
        ),

        _ => None,
    }
}
