//! Reader configuration from `--config` and `--log-level`

use anyhow::{Context, Result};
use obz_format::ReaderConfig;
use std::path::Path;

/// Build the reader configuration: defaults, then the TOML file, then the
/// `--log-level` override.
pub fn load(path: Option<&Path>, log_level: Option<&str>) -> Result<ReaderConfig> {
    let mut config = match path {
        Some(path) => from_file(path)?,
        None => ReaderConfig::default(),
    };

    if let Some(level) = log_level {
        config.log_level = level.to_string();
        config
            .validate()
            .with_context(|| format!("Invalid --log-level: {level}"))?;
    }

    Ok(config)
}

fn from_file(path: &Path) -> Result<ReaderConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;

    ReaderConfig::from_toml(&content)
        .with_context(|| format!("Failed to parse config: {}", path.display()))
}
