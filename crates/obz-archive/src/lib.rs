//! Archive decoding and board-graph navigation for obz
//!
//! This crate turns `.obz` archives (and standalone `.obf` boards) into a
//! fully resolved, immutable [`BoardGraph`] and lets a [`Session`] navigate
//! it by following the "load board" links of buttons.
//!
//! # Archive Structure
//!
//! ```text
//! communication.obz
//! ├── manifest.json              # root board + id -> path maps
//! ├── boards/
//! │   ├── home.obf
//! │   └── food.obf
//! └── images/
//!     ├── 1.png                  # inlined as data: URLs on load
//!     └── 2.jpg
//! ```
//!
//! # Example
//!
//! ```no_run
//! use obz_archive::{ArchiveResolver, LinkTarget, Navigation, Session};
//! use obz_format::ReaderConfig;
//!
//! let resolver = ArchiveResolver::new(ReaderConfig::default());
//! let graph = resolver.load_file("communication.obz")?;
//!
//! let mut session = Session::new(graph);
//! if let Navigation::Moved(board) = session.follow(&LinkTarget::by_id("food")) {
//!     println!("now showing {}", board.name);
//! }
//! # Ok::<(), obz_format::ObzError>(())
//! ```

mod container;
mod graph;
mod inline;
mod input;
mod navigation;
mod progress;
mod resolver;

#[cfg(any(test, feature = "test-support"))]
pub mod builder;

#[cfg(any(test, feature = "test-support"))]
pub use builder::ArchiveBuilder;
pub use container::Container;
pub use graph::{BoardGraph, DanglingLink, LinkTarget, LinkTier, SkipReason, SkippedBoard};
pub use inline::{AssetInliner, InlineReport, inline_assets};
pub use input::{ARCHIVE_EXTENSION, BOARD_EXTENSION, InputKind};
pub use navigation::{Navigation, Press, Session};
pub use progress::ProgressSink;
pub use resolver::{ArchiveResolver, parse_manifest, resolve_archive, resolve_standalone};

pub use obz_format::{MANIFEST_FILE, ObzError, ObzResult};
