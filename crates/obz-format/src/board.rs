//! Board documents and the board decoder.
//!
//! A board is one `.obf` document: a grid of button ids, the buttons
//! themselves and the images they reference. [`decode_board`] parses board
//! JSON and normalizes the grid so consumers never have to re-check it.

use crate::ids;
use crate::{ObzError, ObzResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

/// One communication board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// Format tag (e.g., "open-board-0.1").
    #[serde(default, deserialize_with = "ids::text")]
    pub format: String,

    /// Board identifier.
    #[serde(deserialize_with = "ids::id")]
    pub id: String,

    /// Human-readable board name.
    #[serde(default, deserialize_with = "ids::text")]
    pub name: String,

    /// Locale tag (e.g., "en").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Canonical URL of the board, if published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Button layout.
    pub grid: Grid,

    /// Buttons referenced by the grid.
    pub buttons: Vec<Button>,

    /// Images referenced by buttons.
    #[serde(default)]
    pub images: Vec<Image>,
}

/// Rectangular button layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    #[serde(default)]
    pub rows: usize,

    #[serde(default)]
    pub columns: usize,

    /// `rows` rows of `columns` cells; `None` is an empty cell.
    #[serde(deserialize_with = "ids::cells")]
    pub order: Vec<Vec<Option<String>>>,
}

/// A grid cell's interactive unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    #[serde(deserialize_with = "ids::id")]
    pub id: String,

    #[serde(default, deserialize_with = "ids::text")]
    pub label: String,

    #[serde(
        default,
        deserialize_with = "ids::opt_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_id: Option<String>,

    /// Present for link-mode buttons.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_board: Option<LoadBoard>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocalization: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

/// Link descriptor of a link-mode button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBoard {
    #[serde(
        default,
        deserialize_with = "ids::opt_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Image referenced by buttons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    #[serde(deserialize_with = "ids::id")]
    pub id: String,

    #[serde(default)]
    pub width: u32,

    #[serde(default)]
    pub height: u32,

    #[serde(default, deserialize_with = "ids::text")]
    pub content_type: String,

    /// External reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Inline `data:` URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    /// Archive-relative path, pending inlining.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// The two mutually exclusive behaviors of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonMode<'a> {
    /// Pressing navigates to another board.
    Link(&'a LoadBoard),
    /// Pressing emits this text.
    Speak(&'a str),
}

/// Where an image's picture comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource<'a> {
    Url(&'a str),
    Data(&'a str),
    Path(&'a str),
    Missing,
}

/// Largest grid, in cells, a decoded board may have.
pub const MAX_GRID_CELLS: usize = 10_000;

/// Decode one board document.
///
/// Fails with [`ObzError::BoardInvalid`] when the text is not JSON or lacks
/// `id`, `grid` or `buttons`. Grid cells naming unknown buttons become empty
/// and the grid is reshaped to `rows x columns`. Declared dimensions beyond
/// [`MAX_GRID_CELLS`] are ignored in favor of the shape of `order`; if that
/// is still too large the board is invalid.
pub fn decode_board(text: &str) -> ObzResult<Board> {
    let mut board: Board =
        serde_json::from_str(text).map_err(|e| ObzError::BoardInvalid(e.to_string()))?;

    if board.id.trim().is_empty() {
        return Err(ObzError::BoardInvalid("board id is empty".to_string()));
    }

    board.normalize_grid()?;
    Ok(board)
}

impl Board {
    /// Look up a button by id.
    #[must_use]
    pub fn button(&self, id: &str) -> Option<&Button> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Look up an image by id.
    #[must_use]
    pub fn image(&self, id: &str) -> Option<&Image> {
        self.images.iter().find(|i| i.id == id)
    }

    /// Button occupying a grid cell, if any.
    #[must_use]
    pub fn button_at(&self, row: usize, column: usize) -> Option<&Button> {
        self.grid
            .order
            .get(row)?
            .get(column)?
            .as_deref()
            .and_then(|id| self.button(id))
    }

    /// Iterate every grid cell in row-major order as `(row, column, button)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Option<&Button>)> + '_ {
        self.grid.order.iter().enumerate().flat_map(move |(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, cell)| (r, c, cell.as_deref().and_then(|id| self.button(id))))
        })
    }

    /// Buttons in link mode, in declaration order.
    pub fn links(&self) -> impl Iterator<Item = &Button> {
        self.buttons.iter().filter(|b| b.is_link())
    }

    /// Images still waiting to be inlined from the archive.
    pub fn pending_images(&self) -> impl Iterator<Item = &Image> {
        self.images.iter().filter(|i| i.is_pending())
    }

    fn normalize_grid(&mut self) -> ObzResult<()> {
        let known: HashSet<&str> = self.buttons.iter().map(|b| b.id.as_str()).collect();
        let grid = &mut self.grid;

        let order_rows = grid.order.len();
        let order_columns = grid.order.iter().map(Vec::len).max().unwrap_or(0);
        let declared_rows = if grid.rows == 0 { order_rows } else { grid.rows };
        let declared_columns = if grid.columns == 0 {
            order_columns
        } else {
            grid.columns
        };

        let (rows, columns) = if fits_grid(declared_rows, declared_columns) {
            (declared_rows, declared_columns)
        } else if fits_grid(order_rows, order_columns) {
            warn!(
                board = %self.id,
                rows = declared_rows,
                columns = declared_columns,
                "declared grid too large, using order dimensions"
            );
            (order_rows, order_columns)
        } else {
            return Err(ObzError::BoardInvalid(format!(
                "grid of {order_rows}x{order_columns} exceeds {MAX_GRID_CELLS} cells"
            )));
        };

        let mut dangling = 0usize;
        let mut overflow = 0usize;

        grid.order.resize_with(rows.max(grid.order.len()), Vec::new);
        for row in grid.order.iter_mut() {
            if row.len() > columns {
                overflow += row[columns..].iter().filter(|c| c.is_some()).count();
            }
            row.resize(columns, None);
            for cell in row.iter_mut() {
                if cell.as_deref().is_some_and(|id| !known.contains(id)) {
                    debug!(board = %self.id, cell = ?cell, "grid cell references unknown button");
                    *cell = None;
                    dangling += 1;
                }
            }
        }
        if grid.order.len() > rows {
            overflow += grid
                .order
                .drain(rows..)
                .flatten()
                .filter(Option::is_some)
                .count();
        }

        grid.rows = rows;
        grid.columns = columns;

        if overflow > 0 {
            warn!(
                board = %self.id,
                rows,
                columns,
                dropped = overflow,
                "grid order exceeds declared dimensions"
            );
        }
        if dangling > 0 {
            debug!(board = %self.id, cleared = dangling, "cleared cells with unknown buttons");
        }
        Ok(())
    }
}

// Each side is bounded too: an empty row list still allocates per row.
fn fits_grid(rows: usize, columns: usize) -> bool {
    rows <= MAX_GRID_CELLS
        && columns <= MAX_GRID_CELLS
        && rows.checked_mul(columns).is_some_and(|cells| cells <= MAX_GRID_CELLS)
}

impl Button {
    /// Which of the two modes this button is in.
    #[must_use]
    pub fn mode(&self) -> ButtonMode<'_> {
        match &self.load_board {
            Some(link) => ButtonMode::Link(link),
            None => ButtonMode::Speak(self.spoken_text()),
        }
    }

    #[must_use]
    pub fn is_link(&self) -> bool {
        self.load_board.is_some()
    }

    /// Text emitted in speak mode: the vocalization, falling back to the label.
    #[must_use]
    pub fn spoken_text(&self) -> &str {
        self.vocalization
            .as_deref()
            .filter(|v| !v.is_empty())
            .unwrap_or(&self.label)
    }

    /// The image this button shows, if it names one the board has.
    #[must_use]
    pub fn image<'b>(&self, board: &'b Board) -> Option<&'b Image> {
        self.image_id.as_deref().and_then(|id| board.image(id))
    }
}

impl Image {
    /// The authoritative source: external url, then inline data, then path.
    #[must_use]
    pub fn source(&self) -> ImageSource<'_> {
        fn non_empty(value: &Option<String>) -> Option<&str> {
            value.as_deref().filter(|s| !s.is_empty())
        }

        if let Some(url) = non_empty(&self.url) {
            ImageSource::Url(url)
        } else if let Some(data) = non_empty(&self.data) {
            ImageSource::Data(data)
        } else if let Some(path) = non_empty(&self.path) {
            ImageSource::Path(path)
        } else {
            ImageSource::Missing
        }
    }

    /// Has an archive path but no inline data yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.data.as_deref().is_none_or(str::is_empty)
            && self.path.as_deref().is_some_and(|p| !p.is_empty())
    }

    /// Content type to use for inlining, guessed from the path when the
    /// document leaves it blank.
    #[must_use]
    pub fn effective_content_type(&self) -> &str {
        if !self.content_type.trim().is_empty() {
            return self.content_type.trim();
        }
        self.path
            .as_deref()
            .map(guess_content_type)
            .unwrap_or("application/octet-stream")
    }
}

/// Guess an image content type from a file extension.
#[must_use]
pub fn guess_content_type(path: &str) -> &'static str {
    let extension = path
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}
