use crate::conf::error::ConfigError;
use crate::conf::types::NetmonConfig;
use std::fs;
use std::path::Path;

/// Looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "netmon.toml";

/// Loads the configuration.
///
/// An explicit path must exist. Without one, `netmon.toml` in the working
/// directory is used when present and the built-in defaults otherwise.
pub fn load_config(path: Option<&Path>) -> Result<NetmonConfig, ConfigError> {
    match path {
        Some(path) => load_file(path),
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.is_file() {
                load_file(default)
            } else {
                tracing::debug!("no {DEFAULT_CONFIG_FILE} found, using built-in defaults");
                Ok(NetmonConfig::default())
            }
        }
    }
}

pub fn load_file(path: &Path) -> Result<NetmonConfig, ConfigError> {
    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    parse_config(path, &s)
}

pub fn parse_config(path: &Path, contents: &str) -> Result<NetmonConfig, ConfigError> {
    let cfg: NetmonConfig = toml::from_str(contents).map_err(|e| ConfigError::parse(path, e))?;
    validate(&cfg)?;

    tracing::debug!(path = %path.display(), "configuration loaded");
    Ok(cfg)
}

pub fn validate(cfg: &NetmonConfig) -> Result<(), ConfigError> {
    let threshold = cfg.analysis.recovery_threshold;
    if threshold > 100 {
        return Err(ConfigError::InvalidThreshold { threshold });
    }
    Ok(())
}

