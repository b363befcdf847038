//! Asset inlining.
//!
//! Images that point at an archive path are rewritten to carry their bytes as
//! a `data:` URL, so nothing downstream needs the archive again.

use crate::Container;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use obz_format::{Board, Image, ObzError, ReaderConfig};
use serde::Serialize;
use tracing::{debug, warn};

/// Outcome counts of one inlining pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InlineReport {
    /// Images that received inline data.
    pub inlined: usize,
    /// Images whose path is not in the archive.
    pub missing: usize,
    /// Images left alone because they are too large or unreadable.
    pub skipped: usize,
}

/// Rewrites archive-relative images into inline `data:` URLs.
#[derive(Debug, Clone, Copy)]
pub struct AssetInliner {
    max_image_bytes: u64,
}

impl Default for AssetInliner {
    fn default() -> Self {
        Self::from_config(&ReaderConfig::default())
    }
}

impl AssetInliner {
    #[must_use]
    pub fn new(max_image_bytes: u64) -> Self {
        Self { max_image_bytes }
    }

    #[must_use]
    pub fn from_config(config: &ReaderConfig) -> Self {
        Self::new(config.max_image_bytes)
    }

    /// Inline every pending image of `board` that resolves in `container`.
    ///
    /// Images whose path does not resolve are returned unchanged; a board with
    /// no pending images comes back equal to the input.
    pub fn inline(&self, mut board: Board, container: &Container) -> (Board, InlineReport) {
        let mut report = InlineReport::default();

        for image in board.images.iter_mut().filter(|i| i.is_pending()) {
            let Some(path) = image.path.clone() else {
                continue;
            };

            match self.load(&path, container) {
                Ok(bytes) => {
                    image.data = Some(data_url(image, &bytes));
                    report.inlined += 1;
                }
                Err(ObzError::NotFound(_)) => {
                    debug!(board = %board.id, image = %image.id, %path, "image entry not in archive");
                    report.missing += 1;
                }
                Err(e) => {
                    warn!(board = %board.id, image = %image.id, %path, error = %e, "image not inlined");
                    report.skipped += 1;
                }
            }
        }

        (board, report)
    }

    fn load(&self, path: &str, container: &Container) -> Result<Vec<u8>, ObzError> {
        let size = container
            .entry_size(path)
            .ok_or_else(|| ObzError::NotFound(path.to_string()))?;

        if size > self.max_image_bytes {
            return Err(ObzError::Format(format!(
                "{size} bytes exceeds limit of {}",
                self.max_image_bytes
            )));
        }

        container.read_binary(path)
    }
}

/// Inline the pending images of `board` with default limits.
pub fn inline_assets(board: Board, container: &Container) -> Board {
    AssetInliner::default().inline(board, container).0
}

fn data_url(image: &Image, bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        image.effective_content_type(),
        STANDARD.encode(bytes)
    )
}
