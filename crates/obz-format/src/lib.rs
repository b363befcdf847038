//! obz-format - Typed documents for Open Board archives
//!
//! This crate provides the archive-independent half of obz:
//! - [`Manifest`] and [`Board`] documents with their buttons, grid and images
//! - [`decode_board`] for turning board JSON into a normalized [`Board`]
//! - [`ObzError`] for error handling
//! - [`ReaderConfig`] for reader configuration

mod board;
mod config;
mod error;
mod ids;
mod manifest;

pub use board::{
    Board, Button, ButtonMode, Grid, Image, ImageSource, LoadBoard, MAX_GRID_CELLS, decode_board,
    guess_content_type,
};
pub use config::ReaderConfig;
pub use error::{ObzError, ObzResult};
pub use manifest::{MANIFEST_FILE, Manifest, ManifestPaths, STANDALONE_BOARD_PATH};

/// Format tag written into synthesized manifests.
pub const OPEN_BOARD_FORMAT: &str = "open-board-0.1";

/// Log levels understood by the reader configuration
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Off = 5,
}

impl LogLevel {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            4 => LogLevel::Error,
            _ => LogLevel::Off,
        }
    }

    /// Parse a level name such as `"debug"` (case-insensitive)
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            "off" | "none" => Some(LogLevel::Off),
            _ => None,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = ObzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::parse(s).ok_or_else(|| ObzError::Config(format!("unknown log level: {s}")))
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Board, Button, ButtonMode, Image, ImageSource, LoadBoard, LogLevel, Manifest, ObzError,
        ObzResult, ReaderConfig, decode_board,
    };
}

#[cfg(test)]
mod lib_tests;
