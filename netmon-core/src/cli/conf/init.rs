use crate::conf::ConfigError;
use anyhow::{Context, Result};
use rust_embed::RustEmbed;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "config-templates/"]
pub struct ConfigTemplates;

pub fn init(path: PathBuf) -> Result<()> {
    write_default_config(&path)?;

    println!("✔ Initialized netmon config in {}", path.display());
    println!();
    println!("Next steps:");
    println!("  netmon config check {}", path.display());
    println!("  netmon describe");

    Ok(())
}

/// Writes the default template, refusing to overwrite an existing file.
pub fn write_default_config(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(ConfigError::AlreadyExists {
            path: path.to_path_buf(),
        }
        .into());
    }

    let contents = template("netmon.toml")?;
    fs::write(path, contents.trim_start()).map_err(|source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}

/// Fetch an embedded config template as UTF-8 text
pub fn template(path: &str) -> Result<String> {
    let file = ConfigTemplates::get(path)
        .with_context(|| format!("missing embedded config template: {path}"))?;

    let s =
        std::str::from_utf8(file.data.as_ref()).context("config template is not valid UTF-8")?;

    Ok(s.to_owned())
}
