use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use fusuma_proto::ConfigFile;

use crate::core::Config;

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("fusuma").join("config.json"))
}

/// Loads the configuration from `path`, or from the default location.
/// A missing default file means built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => {
                tracing::info!("No config file found, using defaults");
                return Ok(Config::from_file(ConfigFile::default()));
            }
        },
    };

    tracing::info!("Loading config from {}", path.display());
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let file = parse_config(&json)
        .with_context(|| format!("Invalid config: {}", path.display()))?;
    Ok(Config::from_file(file))
}

pub fn parse_config(json: &str) -> Result<ConfigFile> {
    let file: ConfigFile = serde_json::from_str(json)?;
    validate(&file)?;
    Ok(file)
}

fn validate(file: &ConfigFile) -> Result<()> {
    if file.tags.is_empty() {
        bail!("At least one tag is required");
    }
    let mut seen = HashSet::new();
    for tag in &file.tags {
        if tag.name.is_empty() {
            bail!("Tag names must not be empty");
        }
        if !seen.insert(tag.name.as_str()) {
            bail!("Duplicate tag name: {}", tag.name);
        }
    }
    Ok(())
}
