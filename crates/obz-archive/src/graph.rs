//! The resolved board graph and link resolution.
//!
//! A [`BoardGraph`] is built once per load and never mutated afterwards.
//! [`BoardGraph::resolve_link`] maps a button's link target onto a loaded
//! board using a fixed fallback chain, because real archives are produced by
//! tools that disagree on how ids and paths relate:
//!
//! 1. the manifest key equals the target id, and either the board's own id
//!    equals it ([`LinkTier::IdExact`]) or the manifest path recorded for the
//!    key contains the board's id ([`LinkTier::IdSubstring`]);
//! 2. a board whose manifest path equals the target path
//!    ([`LinkTier::PathExact`]), else one whose path contains, or is contained
//!    by, the target path ([`LinkTier::PathSubstring`]);
//! 3. any loaded board, then the root, whose own id equals the target id
//!    ([`LinkTier::IdScan`]).
//!
//! Scans walk boards in manifest order and the first hit wins.

use indexmap::IndexMap;
use obz_format::{Board, LoadBoard, Manifest};
use serde::Serialize;
use std::fmt;
use std::iter;
use std::sync::Arc;

/// A navigation request extracted from a button's link descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct LinkTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Which step of the fallback chain matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkTier {
    IdExact,
    IdSubstring,
    PathExact,
    PathSubstring,
    IdScan,
}

/// Why a manifest board is absent from the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "detail")]
pub enum SkipReason {
    /// The manifest path has no archive entry.
    MissingEntry,
    /// The entry could not be read or decoded.
    Invalid(String),
}

/// A manifest board that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedBoard {
    pub id: String,
    pub path: String,
    pub reason: SkipReason,
}

/// A link-mode button whose target resolves to no loaded board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingLink {
    pub board_id: String,
    pub button_id: String,
    pub target: LinkTarget,
}

/// Fully resolved boards of one archive.
#[derive(Debug, Clone)]
pub struct BoardGraph {
    manifest: Manifest,
    boards: IndexMap<String, Arc<Board>>,
    root: Arc<Board>,
    skipped: Vec<SkippedBoard>,
    digest: Option<String>,
}

impl LinkTarget {
    #[must_use]
    pub fn new(id: Option<String>, path: Option<String>) -> Self {
        Self { id, path }
    }

    #[must_use]
    pub fn by_id(id: impl Into<String>) -> Self {
        Self::new(Some(id.into()), None)
    }

    #[must_use]
    pub fn by_path(path: impl Into<String>) -> Self {
        Self::new(None, Some(path.into()))
    }

    /// The target id; empty strings count as unset.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// The target path; empty strings count as unset.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref().filter(|path| !path.is_empty())
    }
}

impl From<&LoadBoard> for LinkTarget {
    fn from(link: &LoadBoard) -> Self {
        Self::new(link.id.clone(), link.path.clone())
    }
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.id(), self.path()) {
            (Some(id), Some(path)) => write!(f, "id={id} path={path}"),
            (Some(id), None) => write!(f, "id={id}"),
            (None, Some(path)) => write!(f, "path={path}"),
            (None, None) => write!(f, "<empty>"),
        }
    }
}

impl BoardGraph {
    /// Assemble a graph from already decoded boards.
    ///
    /// `boards` should be keyed by manifest id in manifest order.
    #[must_use]
    pub fn from_parts(
        manifest: Manifest,
        boards: IndexMap<String, Arc<Board>>,
        root: Arc<Board>,
    ) -> Self {
        Self {
            manifest,
            boards,
            root,
            skipped: Vec::new(),
            digest: None,
        }
    }

    pub(crate) fn with_skipped(mut self, skipped: Vec<SkippedBoard>) -> Self {
        self.skipped = skipped;
        self
    }

    pub(crate) fn with_digest(mut self, digest: String) -> Self {
        self.digest = Some(digest);
        self
    }

    #[must_use]
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Loaded boards keyed by manifest id, in manifest order.
    #[must_use]
    pub fn boards(&self) -> &IndexMap<String, Arc<Board>> {
        &self.boards
    }

    #[must_use]
    pub fn board(&self, id: &str) -> Option<&Arc<Board>> {
        self.boards.get(id)
    }

    /// Loaded boards in manifest order, then the root if it is not one of them.
    pub fn all_boards(&self) -> impl Iterator<Item = &Arc<Board>> {
        let root_listed = self.boards.values().any(|b| Arc::ptr_eq(b, &self.root));
        let extra_root = (!root_listed).then_some(&self.root);

        self.boards.values().chain(extra_root)
    }

    #[must_use]
    pub fn root(&self) -> &Arc<Board> {
        &self.root
    }

    /// Manifest boards that were left out of the graph.
    #[must_use]
    pub fn skipped(&self) -> &[SkippedBoard] {
        &self.skipped
    }

    /// SHA256 of the archive this graph came from; `None` for standalone boards.
    #[must_use]
    pub fn digest(&self) -> Option<&str> {
        self.digest.as_deref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Resolve a link target to a loaded board; `None` is a dangling link.
    #[must_use]
    pub fn resolve_link(&self, target: &LinkTarget) -> Option<Arc<Board>> {
        self.resolve_link_with_tier(target).map(|(board, _)| board)
    }

    /// Like [`resolve_link`](Self::resolve_link), also reporting which tier matched.
    #[must_use]
    pub fn resolve_link_with_tier(&self, target: &LinkTarget) -> Option<(Arc<Board>, LinkTier)> {
        let hit = |board: &Arc<Board>, tier| Some((Arc::clone(board), tier));

        if let Some(id) = target.id()
            && let Some(board) = self.boards.get(id)
        {
            if board.id == id {
                return hit(board, LinkTier::IdExact);
            }
            if self
                .manifest
                .board_path(id)
                .is_some_and(|path| path.contains(board.id.as_str()))
            {
                return hit(board, LinkTier::IdSubstring);
            }
        }

        if let Some(wanted) = target.path() {
            if let Some((_, board)) = self.recorded_paths().find(|(path, _)| *path == wanted) {
                return hit(board, LinkTier::PathExact);
            }
            if let Some((_, board)) = self
                .recorded_paths()
                .find(|(path, _)| path.contains(wanted) || wanted.contains(path))
            {
                return hit(board, LinkTier::PathSubstring);
            }
        }

        if let Some(id) = target.id()
            && let Some(board) = self
                .boards
                .values()
                .chain(iter::once(&self.root))
                .find(|board| board.id == id)
        {
            return hit(board, LinkTier::IdScan);
        }

        None
    }

    /// Every link-mode button, across all loaded boards and the root, whose
    /// target does not resolve.
    #[must_use]
    pub fn dangling_links(&self) -> Vec<DanglingLink> {
        self.all_boards()
            .flat_map(|board| {
                board.links().filter_map(move |button| {
                    let target = LinkTarget::from(button.load_board.as_ref()?);
                    self.resolve_link(&target).is_none().then(|| DanglingLink {
                        board_id: board.id.clone(),
                        button_id: button.id.clone(),
                        target,
                    })
                })
            })
            .collect()
    }

    /// Loaded boards paired with their non-empty manifest path, in manifest order.
    fn recorded_paths(&self) -> impl Iterator<Item = (&str, &Arc<Board>)> {
        self.boards.iter().filter_map(|(key, board)| {
            self.manifest
                .board_path(key)
                .filter(|path| !path.is_empty())
                .map(|path| (path, board))
        })
    }
}


#[cfg(test)]
#[path = "graph/graph_proptests.rs"]
mod graph_proptests;
