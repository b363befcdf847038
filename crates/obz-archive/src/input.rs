//! Input kind detection.
//!
//! Uploads are told apart by file extension, or by content type at a service
//! boundary.

use obz_format::{ObzError, ObzResult};
use std::path::Path;

/// Archive file extension.
pub const ARCHIVE_EXTENSION: &str = "obz";

/// Standalone board file extension.
pub const BOARD_EXTENSION: &str = "obf";

/// What a byte stream holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// A zip container with `manifest.json`.
    Archive,
    /// A single board document.
    StandaloneBoard,
}

impl InputKind {
    /// Detect from a file name: `.obz` or `.obf`, case-insensitive.
    pub fn from_file_name(name: &str) -> ObzResult<Self> {
        Self::from_path(Path::new(name))
    }

    /// Detect from a path's extension.
    pub fn from_path(path: &Path) -> ObzResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some(ARCHIVE_EXTENSION) => Ok(Self::Archive),
            Some(BOARD_EXTENSION) => Ok(Self::StandaloneBoard),
            _ => Err(ObzError::UnsupportedInput(format!(
                "expected a .{ARCHIVE_EXTENSION} or .{BOARD_EXTENSION} file: {}",
                path.display()
            ))),
        }
    }

    /// Detect from a `Content-Type` header value.
    ///
    /// Only archive uploads are accepted this way; anything else is the
    /// equivalent of a 400 response.
    pub fn from_content_type(content_type: &str) -> ObzResult<Self> {
        let lowered = content_type.to_ascii_lowercase();
        if lowered.contains("application/zip") || lowered.contains("application/octet-stream") {
            Ok(Self::Archive)
        } else {
            Err(ObzError::UnsupportedInput(format!(
                "invalid content type {content_type:?}: expected application/zip or application/octet-stream"
            )))
        }
    }
}
