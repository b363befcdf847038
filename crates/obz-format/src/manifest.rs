//! Archive manifest schema.
//!
//! The manifest names the root board and maps board, image and sound ids to
//! archive-relative paths. Entry order is preserved as written.

use crate::{OPEN_BOARD_FORMAT, ObzError, ObzResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Manifest file name within an archive.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Path given to the lone board of a standalone `.obf` upload.
pub const STANDALONE_BOARD_PATH: &str = "board.obf";

/// Archive manifest - the index of an `.obz` archive.
///
/// This corresponds to the `manifest.json` file in the archive root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Format tag (e.g., "open-board-0.1").
    #[serde(default)]
    pub format: String,

    /// Archive path of the board shown first.
    pub root: String,

    /// Id to path mappings.
    pub paths: ManifestPaths,
}

/// Id to archive-path mappings, in manifest order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestPaths {
    pub boards: IndexMap<String, String>,

    #[serde(default)]
    pub images: IndexMap<String, String>,

    #[serde(default)]
    pub sounds: IndexMap<String, String>,
}

impl Manifest {
    /// Manifest for a single standalone board keyed by its own id.
    #[must_use]
    pub fn standalone(board_id: &str) -> Self {
        let mut boards = IndexMap::new();
        boards.insert(board_id.to_string(), STANDALONE_BOARD_PATH.to_string());

        Self {
            format: OPEN_BOARD_FORMAT.to_string(),
            root: STANDALONE_BOARD_PATH.to_string(),
            paths: ManifestPaths {
                boards,
                images: IndexMap::new(),
                sounds: IndexMap::new(),
            },
        }
    }

    /// Archive path recorded for a board id.
    #[must_use]
    pub fn board_path(&self, id: &str) -> Option<&str> {
        self.paths.boards.get(id).map(String::as_str)
    }

    /// Board id whose recorded path is `path`, first in manifest order.
    #[must_use]
    pub fn board_id_for_path(&self, path: &str) -> Option<&str> {
        self.paths
            .boards
            .iter()
            .find(|(_, p)| p.as_str() == path)
            .map(|(id, _)| id.as_str())
    }

    /// Validate the manifest.
    pub fn validate(&self) -> ObzResult<()> {
        if self.root.trim().is_empty() {
            return Err(ObzError::ManifestInvalid("root is required".to_string()));
        }

        Ok(())
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> ObzResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ObzError::ManifestInvalid(e.to_string()))
    }

    /// Deserialize and validate from JSON.
    pub fn from_json(json: &str) -> ObzResult<Self> {
        let manifest: Self =
            serde_json::from_str(json).map_err(|e| ObzError::ManifestInvalid(e.to_string()))?;
        manifest.validate()?;
        Ok(manifest)
    }
}
