//! Archive resolution: bytes in, [`BoardGraph`] out.
//!
//! Every manifest board is decoded and inlined once, eagerly. Missing or
//! broken boards are skipped with a warning; archive-level problems (not a
//! zip, no manifest, no root) fail the whole load and no graph is produced.

use crate::container::normalize_entry_name;
use crate::graph::{BoardGraph, SkipReason, SkippedBoard};
use crate::inline::AssetInliner;
use crate::input::InputKind;
use crate::progress::{Progress, ProgressSink};
use crate::Container;
use indexmap::IndexMap;
use obz_format::{Board, MANIFEST_FILE, Manifest, ObzError, ObzResult, ReaderConfig, decode_board};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Turns archive bytes or standalone board text into a [`BoardGraph`].
#[derive(Debug, Clone, Default)]
pub struct ArchiveResolver {
    config: ReaderConfig,
}

impl ArchiveResolver {
    #[must_use]
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Resolve `.obz` archive bytes.
    pub fn resolve(&self, bytes: &[u8]) -> ObzResult<BoardGraph> {
        self.resolve_with_progress(bytes, &mut |_: u8| {})
    }

    /// Resolve `.obz` archive bytes, reporting progress to `sink`.
    pub fn resolve_with_progress(
        &self,
        bytes: &[u8],
        sink: &mut dyn ProgressSink,
    ) -> ObzResult<BoardGraph> {
        let mut progress = Progress::new(sink);
        progress.report(0);

        let container = Container::open(bytes.to_vec())?;
        progress.report(20);

        self.resolve_in(&container, &mut progress)
    }

    /// Resolve an already opened container.
    pub fn resolve_container(&self, container: &Container) -> ObzResult<BoardGraph> {
        let mut sink = |_: u8| {};
        self.resolve_in(container, &mut Progress::new(&mut sink))
    }

    /// Resolve a standalone `.obf` board into a one-board graph.
    pub fn resolve_standalone(&self, text: &str) -> ObzResult<BoardGraph> {
        let board = Arc::new(decode_board(text.trim_start_matches('\u{feff}'))?);
        let manifest = Manifest::standalone(&board.id);

        let mut boards = IndexMap::new();
        boards.insert(board.id.clone(), Arc::clone(&board));

        info!(root = %board.id, buttons = board.buttons.len(), "standalone board loaded");
        Ok(BoardGraph::from_parts(manifest, boards, board))
    }

    /// Resolve bytes of a known kind.
    pub fn load(&self, bytes: &[u8], kind: InputKind) -> ObzResult<BoardGraph> {
        match kind {
            InputKind::Archive => self.resolve(bytes),
            InputKind::StandaloneBoard => {
                let text = std::str::from_utf8(bytes)
                    .map_err(|e| ObzError::BoardInvalid(format!("not UTF-8: {e}")))?;
                self.resolve_standalone(text)
            }
        }
    }

    /// Read a file from disk, detecting its kind from the extension.
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> ObzResult<BoardGraph> {
        let path = path.as_ref();
        let kind = InputKind::from_path(path)?;
        let bytes = std::fs::read(path)?;

        debug!(path = %path.display(), ?kind, size = bytes.len(), "loading file");
        self.load(&bytes, kind)
    }

    fn resolve_in(
        &self,
        container: &Container,
        progress: &mut Progress<'_>,
    ) -> ObzResult<BoardGraph> {
        let manifest = parse_manifest(container)?;
        progress.report(40);

        let inliner = AssetInliner::from_config(&self.config);
        let total = manifest.paths.boards.len();
        let mut boards = IndexMap::with_capacity(total);
        let mut by_path: HashMap<&str, Arc<Board>> = HashMap::with_capacity(total);
        let mut skipped = Vec::new();

        for (index, (id, path)) in manifest.paths.boards.iter().enumerate() {
            match self.load_board(container, &inliner, path) {
                Ok(board) => {
                    let board = Arc::new(board);
                    by_path
                        .entry(normalize_entry_name(path))
                        .or_insert_with(|| Arc::clone(&board));
                    boards.insert(id.clone(), board);
                }
                Err(ObzError::NotFound(_)) => {
                    warn!(board = %id, %path, "board entry missing from archive, skipping");
                    skipped.push(SkippedBoard {
                        id: id.clone(),
                        path: path.clone(),
                        reason: SkipReason::MissingEntry,
                    });
                }
                Err(e) => {
                    warn!(board = %id, %path, error = %e, "board could not be decoded, skipping");
                    skipped.push(SkippedBoard {
                        id: id.clone(),
                        path: path.clone(),
                        reason: SkipReason::Invalid(e.to_string()),
                    });
                }
            }
            progress.step(40, 90, index + 1, total);
        }
        progress.report(90);

        let root = match by_path.get(normalize_entry_name(&manifest.root)) {
            Some(board) => Arc::clone(board),
            None => Arc::new(self.load_root(container, &inliner, &manifest.root)?),
        };
        drop(by_path);

        info!(
            boards = boards.len(),
            skipped = skipped.len(),
            root = %root.id,
            digest = %container.digest(),
            "archive loaded"
        );

        let graph = BoardGraph::from_parts(manifest, boards, root)
            .with_skipped(skipped)
            .with_digest(container.digest().to_string());
        progress.report(100);
        Ok(graph)
    }

    fn load_board(
        &self,
        container: &Container,
        inliner: &AssetInliner,
        path: &str,
    ) -> ObzResult<Board> {
        let text = container.read_text(path)?;
        let board = decode_board(&text)?;

        if !self.config.inline_images {
            return Ok(board);
        }

        let (board, report) = inliner.inline(board, container);
        debug!(
            board = %board.id,
            %path,
            inlined = report.inlined,
            missing = report.missing,
            skipped = report.skipped,
            "board decoded"
        );
        Ok(board)
    }

    fn load_root(
        &self,
        container: &Container,
        inliner: &AssetInliner,
        root: &str,
    ) -> ObzResult<Board> {
        self.load_board(container, inliner, root)
            .map_err(|e| match e {
                ObzError::NotFound(_) => ObzError::RootMissing(root.to_string()),
                ObzError::BoardInvalid(reason) => ObzError::BoardInvalid(format!("{root}: {reason}")),
                other => ObzError::BoardInvalid(format!("{root}: {other}")),
            })
    }
}

/// Read and parse `manifest.json` from a container.
///
/// Only the manifest itself is checked; referenced paths may be absent.
pub fn parse_manifest(container: &Container) -> ObzResult<Manifest> {
    let text = container.read_text(MANIFEST_FILE).map_err(|e| match e {
        ObzError::NotFound(_) => ObzError::ManifestMissing,
        other => ObzError::ManifestInvalid(other.to_string()),
    })?;

    Manifest::from_json(&text)
}

/// Resolve archive bytes with the default configuration.
pub fn resolve_archive(bytes: &[u8]) -> ObzResult<BoardGraph> {
    ArchiveResolver::default().resolve(bytes)
}

/// Resolve a standalone board with the default configuration.
pub fn resolve_standalone(text: &str) -> ObzResult<BoardGraph> {
    ArchiveResolver::default().resolve_standalone(text)
}
