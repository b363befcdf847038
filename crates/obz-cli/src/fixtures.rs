//! Shared test archives

use obz_archive::{ArchiveBuilder, BoardGraph, resolve_archive};
use obz_format::Manifest;
use serde_json::json;

pub const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// Home links to Food (loaded), Drinks (missing entry) and a broken board;
/// Food links back home and speaks "apple".
pub fn archive_bytes() -> Vec<u8> {
    let manifest = Manifest::from_json(
        r#"{
            "format": "open-board-0.1",
            "root": "boards/home.obf",
            "paths": {
                "boards": {
                    "home": "boards/home.obf",
                    "food": "boards/food.obf",
                    "drinks": "boards/drinks.obf",
                    "broken": "boards/broken.obf"
                },
                "images": {"1": "images/1.png", "2": "images/2.png"},
                "sounds": {}
            }
        }"#,
    )
    .unwrap();

    ArchiveBuilder::new()
        .manifest(manifest)
        .add_json(
            "boards/home.obf",
            &json!({
                "format": "open-board-0.1",
                "id": "home",
                "name": "Home",
                "grid": {"rows": 2, "columns": 2, "order": [["food", "drinks"], ["hi", null]]},
                "buttons": [
                    {"id": "food", "label": "Food", "image_id": "1", "load_board": {"id": "food", "path": "boards/food.obf"}},
                    {"id": "drinks", "label": "Drinks", "load_board": {"id": "drinks", "path": "boards/drinks.obf"}},
                    {"id": "hi", "label": "Hi", "vocalization": "hello", "image_id": "2"}
                ],
                "images": [
                    {"id": "1", "content_type": "image/png", "path": "images/1.png"},
                    {"id": "2", "content_type": "image/png", "path": "images/2.png"}
                ]
            }),
        )
        .add_json(
            "boards/food.obf",
            &json!({
                "id": "food",
                "name": "Food",
                "grid": {"rows": 1, "columns": 2, "order": [["apple", "home"]]},
                "buttons": [
                    {"id": "apple", "label": "apple"},
                    {"id": "home", "label": "Home", "load_board": {"path": "boards/home.obf"}}
                ]
            }),
        )
        .add_bytes("boards/broken.obf", b"{\"id\": ".to_vec())
        .add_bytes("images/1.png", PNG_BYTES.to_vec())
        .to_bytes()
        .unwrap()
}

pub fn graph() -> BoardGraph {
    resolve_archive(&archive_bytes()).unwrap()
}
