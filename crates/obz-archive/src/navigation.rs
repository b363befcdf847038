//! Navigation session over a loaded board graph.
//!
//! The graph is immutable; everything that changes while a user moves
//! between boards (the current board and the history stack) lives in the
//! [`Session`].
//!
//! ```text
//! follow/press (link) ──resolved──→ current pushed to history, target shown
//!                     └─dangling──→ nothing changes
//! back ──────────────────────────→ history popped into current
//! load ──────────────────────────→ new graph, root shown, history cleared
//! ```

use crate::graph::{BoardGraph, LinkTarget};
use obz_format::{Board, ButtonMode, ReaderConfig};
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{debug, warn};

/// Outcome of following a link target.
#[derive(Debug, Clone)]
pub enum Navigation {
    /// The target resolved; this board is now current.
    Moved(Arc<Board>),
    /// The target resolved to nothing; the current board is unchanged.
    Dangling(LinkTarget),
}

/// Outcome of pressing a button on the current board.
#[derive(Debug, Clone)]
pub enum Press {
    /// Link-mode button whose target resolved.
    Navigated(Arc<Board>),
    /// Link-mode button whose target is dangling.
    Dangling(LinkTarget),
    /// Speak-mode button: the text to emit.
    Speak(String),
    /// The current board has no button with this id.
    UnknownButton(String),
}

/// Current board plus back-history over one [`BoardGraph`].
#[derive(Debug, Clone)]
pub struct Session {
    graph: BoardGraph,
    current: Arc<Board>,
    history: VecDeque<Arc<Board>>,
    history_limit: usize,
}

impl Session {
    /// Start at the graph's root with an empty history.
    #[must_use]
    pub fn new(graph: BoardGraph) -> Self {
        let current = Arc::clone(graph.root());
        Self {
            graph,
            current,
            history: VecDeque::new(),
            history_limit: ReaderConfig::default().board_history_limit,
        }
    }

    /// Keep at most `limit` boards of history; the oldest are dropped first.
    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit.max(1);
        self.trim_history();
        self
    }

    /// Replace the graph wholesale and return to its root.
    pub fn load(&mut self, graph: BoardGraph) {
        self.current = Arc::clone(graph.root());
        self.graph = graph;
        self.history.clear();
        debug!(root = %self.current.id, "session reset to new graph");
    }

    /// Follow a link target from the current board.
    pub fn follow(&mut self, target: &LinkTarget) -> Navigation {
        match self.graph.resolve_link(target) {
            Some(board) => {
                debug!(from = %self.current.id, to = %board.id, "navigated");
                let previous = std::mem::replace(&mut self.current, Arc::clone(&board));
                self.history.push_back(previous);
                self.trim_history();
                Navigation::Moved(board)
            }
            None => {
                warn!(board = %self.current.id, %target, "dangling link");
                Navigation::Dangling(target.clone())
            }
        }
    }

    /// Press a button of the current board by id.
    pub fn press(&mut self, button_id: &str) -> Press {
        let Some(button) = self.current.button(button_id) else {
            return Press::UnknownButton(button_id.to_string());
        };

        let target = match button.mode() {
            ButtonMode::Speak(text) => return Press::Speak(text.to_string()),
            ButtonMode::Link(link) => LinkTarget::from(link),
        };

        match self.follow(&target) {
            Navigation::Moved(board) => Press::Navigated(board),
            Navigation::Dangling(target) => Press::Dangling(target),
        }
    }

    /// Return to the previously shown board, if any.
    pub fn back(&mut self) -> Option<Arc<Board>> {
        let previous = self.history.pop_back()?;
        self.current = Arc::clone(&previous);
        Some(previous)
    }

    #[must_use]
    pub fn current(&self) -> &Arc<Board> {
        &self.current
    }

    /// Previously shown boards, oldest first.
    #[must_use]
    pub fn history(&self) -> &VecDeque<Arc<Board>> {
        &self.history
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    #[must_use]
    pub fn graph(&self) -> &BoardGraph {
        &self.graph
    }

    fn trim_history(&mut self) {
        while self.history.len() > self.history_limit {
            self.history.pop_front();
        }
    }
}
