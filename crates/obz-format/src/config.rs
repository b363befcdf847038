//! Reader configuration types

use crate::{LogLevel, ObzError, ObzResult};
use serde::{Deserialize, Serialize};

/// Configuration for loading archives and navigating boards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Initial log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Inline archive images as `data:` URLs while loading
    #[serde(default = "default_inline_images")]
    pub inline_images: bool,

    /// Largest image entry that will be inlined, in bytes
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: u64,

    /// Number of previously visited boards kept for "back"
    #[serde(default = "default_history_limit")]
    pub board_history_limit: usize,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_inline_images() -> bool {
    true
}

fn default_max_image_bytes() -> u64 {
    16 * 1024 * 1024
}

fn default_history_limit() -> usize {
    64
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            inline_images: default_inline_images(),
            max_image_bytes: default_max_image_bytes(),
            board_history_limit: default_history_limit(),
        }
    }
}

impl ReaderConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes; empty input yields defaults
    pub fn from_json(bytes: &[u8]) -> ObzResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_json::from_slice(bytes).map_err(|e| ObzError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Create configuration from TOML text (e.g., an `obz.toml` file)
    pub fn from_toml(text: &str) -> ObzResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| ObzError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parsed log level
    pub fn level(&self) -> ObzResult<LogLevel> {
        self.log_level.parse()
    }

    /// Reject values the reader cannot work with
    pub fn validate(&self) -> ObzResult<()> {
        self.level()?;

        if self.board_history_limit == 0 {
            return Err(ObzError::Config(
                "board_history_limit must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
