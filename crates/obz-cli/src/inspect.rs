//! `obz inspect` - archive summary

use anyhow::Result;
use obz_archive::{BoardGraph, SkipReason};
use serde::Serialize;
use std::fmt::Write as _;

/// Everything `inspect` prints.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub format: String,
    pub digest: Option<String>,
    pub root: RootSummary,
    pub boards: Vec<BoardSummary>,
    pub images: usize,
    pub sounds: usize,
}

#[derive(Debug, Serialize)]
pub struct RootSummary {
    pub path: String,
    pub id: String,
    pub name: String,
    /// Manifest key recorded for the root path; `None` when it is not listed.
    pub key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BoardSummary {
    pub id: String,
    pub path: String,
    pub status: BoardStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buttons: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardStatus {
    Loaded,
    Missing,
    Invalid,
}

impl InspectReport {
    pub fn new(graph: &BoardGraph) -> Self {
        let manifest = graph.manifest();

        let boards = manifest
            .paths
            .boards
            .iter()
            .map(|(id, path)| {
                let loaded = graph.board(id);
                let status = match loaded {
                    Some(_) => BoardStatus::Loaded,
                    None => match graph.skipped().iter().find(|s| s.id == *id) {
                        Some(skipped) if matches!(skipped.reason, SkipReason::Invalid(_)) => {
                            BoardStatus::Invalid
                        }
                        _ => BoardStatus::Missing,
                    },
                };
                BoardSummary {
                    id: id.clone(),
                    path: path.clone(),
                    status,
                    name: loaded.map(|b| b.name.clone()),
                    buttons: loaded.map(|b| b.buttons.len()),
                }
            })
            .collect();

        Self {
            format: manifest.format.clone(),
            digest: graph.digest().map(String::from),
            root: RootSummary {
                path: manifest.root.clone(),
                id: graph.root().id.clone(),
                name: graph.root().name.clone(),
                key: manifest.board_id_for_path(&manifest.root).map(String::from),
            },
            boards,
            images: manifest.paths.images.len(),
            sounds: manifest.paths.sounds.len(),
        }
    }

    /// Human-readable rendering.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let loaded = self
            .boards
            .iter()
            .filter(|b| b.status == BoardStatus::Loaded)
            .count();
        let format = if self.format.is_empty() { "-" } else { self.format.as_str() };

        let _ = writeln!(out, "format:  {format}");
        let _ = writeln!(out, "digest:  {}", self.digest.as_deref().unwrap_or("-"));
        let _ = write!(
            out,
            "root:    {} ({} \"{}\")",
            self.root.path, self.root.id, self.root.name
        );
        if self.root.key.is_none() {
            out.push_str("  not in board map");
        }
        out.push('\n');
        let _ = writeln!(out, "boards:  {loaded}/{} loaded", self.boards.len());
        for board in &self.boards {
            match (board.status, &board.name, board.buttons) {
                (BoardStatus::Loaded, Some(name), Some(buttons)) => {
                    let _ = writeln!(
                        out,
                        "  {}  {}  \"{name}\"  {buttons} buttons",
                        board.id, board.path
                    );
                }
                (BoardStatus::Invalid, ..) => {
                    let _ = writeln!(out, "  {}  {}  invalid", board.id, board.path);
                }
                _ => {
                    let _ = writeln!(out, "  {}  {}  missing", board.id, board.path);
                }
            }
        }
        let _ = writeln!(out, "images:  {}", self.images);
        let _ = writeln!(out, "sounds:  {}", self.sounds);
        out
    }
}

/// Inspect command implementation
pub fn run(graph: &BoardGraph, json: bool) -> Result<()> {
    let report = InspectReport::new(graph);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_text());
    }

    Ok(())
}
