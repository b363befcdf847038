//! Property-based tests for the board decoder
//!
//! Whatever shape the grid arrives in, decoding never panics and every
//! remaining cell names a real button.

use obz_format::{MAX_GRID_CELLS, ObzError, decode_board};
use proptest::prelude::*;
use serde_json::json;

// Strategy: cells drawn from a small id alphabet so some hit real buttons
fn arb_cell() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(vec!["a", "b", "c", "x", "y"]).prop_map(String::from))
}

fn arb_order() -> impl Strategy<Value = Vec<Vec<Option<String>>>> {
    prop::collection::vec(prop::collection::vec(arb_cell(), 0..6), 0..6)
}

fn arb_buttons() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(vec!["a", "b", "c"]).prop_map(String::from),
        0..4,
    )
}

proptest! {
    /// Property: every non-empty cell resolves to a button after decoding
    #[test]
    fn proptest_grid_cells_resolve_or_are_empty(
        order in arb_order(),
        buttons in arb_buttons(),
        rows in 0usize..6,
        columns in 0usize..6,
    ) {
        let doc = json!({
            "id": "board",
            "grid": {"rows": rows, "columns": columns, "order": order},
            "buttons": buttons.iter().map(|id| json!({"id": id, "label": id})).collect::<Vec<_>>(),
        });

        let board = decode_board(&doc.to_string()).unwrap();

        prop_assert_eq!(board.grid.order.len(), board.grid.rows);
        for row in &board.grid.order {
            prop_assert_eq!(row.len(), board.grid.columns);
        }
        for (row, column, _) in board.cells() {
            if let Some(id) = &board.grid.order[row][column] {
                prop_assert!(board.button(id).is_some(), "cell {} names missing button", id);
            }
        }
    }

    /// Property: declared dimensions of any size never panic and stay bounded
    #[test]
    fn proptest_declared_dimensions_are_bounded(
        order in arb_order(),
        rows in any::<usize>(),
        columns in any::<usize>(),
    ) {
        let doc = json!({
            "id": "board",
            "grid": {"rows": rows, "columns": columns, "order": order},
            "buttons": [{"id": "a"}],
        });

        let board = decode_board(&doc.to_string()).unwrap();

        prop_assert!(board.grid.rows * board.grid.columns <= MAX_GRID_CELLS);
        prop_assert_eq!(board.grid.order.len(), board.grid.rows);
    }

    /// Property: arbitrary text never panics the decoder
    #[test]
    fn proptest_arbitrary_text_never_panics(text in ".*") {
        match decode_board(&text) {
            Ok(board) => prop_assert!(!board.id.is_empty()),
            Err(err) => prop_assert!(matches!(err, ObzError::BoardInvalid(_))),
        }
    }

    /// Property: decoding is deterministic
    #[test]
    fn proptest_decoding_is_deterministic(order in arb_order(), buttons in arb_buttons()) {
        let doc = json!({
            "id": "board",
            "grid": {"order": order},
            "buttons": buttons.iter().map(|id| json!({"id": id})).collect::<Vec<_>>(),
        }).to_string();

        prop_assert_eq!(decode_board(&doc).unwrap(), decode_board(&doc).unwrap());
    }
}
