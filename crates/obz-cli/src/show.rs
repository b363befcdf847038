//! `obz show` - text rendering of a board grid

use anyhow::{Result, bail};
use obz_archive::{BoardGraph, LinkTarget};
use obz_format::{Board, Button};
use std::fmt::Write as _;
use std::sync::Arc;

/// Marker appended to link-mode buttons.
pub const LINK_MARKER: &str = "[->]";

/// Placeholder for empty cells.
pub const EMPTY_CELL: &str = ".";

/// Show command implementation
pub fn run(graph: &BoardGraph, board_id: Option<&str>) -> Result<()> {
    let board = select_board(graph, board_id)?;

    print!("{}", render_board(&board));
    Ok(())
}

/// The board `--board` names: a manifest key first, then any board a link
/// with that id would reach. Without an id, the root.
pub fn select_board(graph: &BoardGraph, board_id: Option<&str>) -> Result<Arc<Board>> {
    let Some(id) = board_id else {
        return Ok(Arc::clone(graph.root()));
    };

    if let Some(board) = graph.board(id) {
        return Ok(Arc::clone(board));
    }
    match graph.resolve_link(&LinkTarget::by_id(id)) {
        Some(board) => Ok(board),
        None => bail!("No board '{id}' in this file"),
    }
}

/// Render a board as a header line followed by one line per grid row.
pub fn render_board(board: &Board) -> String {
    let cells: Vec<Vec<String>> = board
        .grid
        .order
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            (0..cells.len())
                .map(|column| {
                    board
                        .button_at(row, column)
                        .map_or_else(|| EMPTY_CELL.to_string(), cell_text)
                })
                .collect()
        })
        .collect();

    let width = cells
        .iter()
        .flatten()
        .map(|cell| cell.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let title = if board.name.is_empty() { &board.id } else { &board.name };
    let _ = writeln!(
        out,
        "{title} ({}) {}x{}",
        board.id, board.grid.rows, board.grid.columns
    );
    for row in &cells {
        let line = row
            .iter()
            .map(|cell| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join(" | ");
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out
}

fn cell_text(button: &Button) -> String {
    let label = if button.label.is_empty() { &button.id } else { &button.label };
    if button.is_link() {
        format!("{label} {LINK_MARKER}")
    } else {
        label.clone()
    }
}
