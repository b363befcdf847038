//! Error types for archive and board handling

use thiserror::Error;

/// Result type alias for obz operations
pub type ObzResult<T> = Result<T, ObzError>;

/// Error type for obz operations
///
/// Archive-level failures abort a load (see [`ObzError::is_fatal`]); board- and
/// asset-level failures are logged by the resolver and the load carries on.
#[derive(Error, Debug)]
pub enum ObzError {
    /// The bytes are not a readable archive, or an entry could not be decompressed
    #[error("unreadable archive: {0}")]
    Format(String),

    /// A named entry is absent from the archive
    #[error("entry not found: {0}")]
    NotFound(String),

    /// The archive has no manifest.json
    #[error("manifest.json not found in archive")]
    ManifestMissing,

    /// The manifest is malformed or lacks required fields
    #[error("invalid manifest: {0}")]
    ManifestInvalid(String),

    /// The manifest names a root board the archive does not contain
    #[error("root board not found in archive: {0}")]
    RootMissing(String),

    /// A board document is malformed or lacks required fields
    #[error("invalid board: {0}")]
    BoardInvalid(String),

    /// The input is neither an archive nor a standalone board
    #[error("unsupported input: {0}")]
    UnsupportedInput(String),

    /// I/O error while reading input from disk
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Reader configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl ObzError {
    /// Returns a stable numeric code for this error kind
    pub fn error_code(&self) -> u32 {
        match self {
            ObzError::Format(_) => 1,
            ObzError::NotFound(_) => 2,
            ObzError::ManifestMissing => 3,
            ObzError::ManifestInvalid(_) => 4,
            ObzError::RootMissing(_) => 5,
            ObzError::BoardInvalid(_) => 6,
            ObzError::UnsupportedInput(_) => 7,
            ObzError::Io(_) => 8,
            ObzError::Config(_) => 9,
        }
    }

    /// Whether this error aborts a whole archive load
    ///
    /// Missing entries and invalid boards only degrade the board or asset they
    /// belong to.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ObzError::NotFound(_) | ObzError::BoardInvalid(_))
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
