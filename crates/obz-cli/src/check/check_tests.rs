#![allow(non_snake_case)]

use super::*;
use crate::fixtures;
use obz_archive::{ArchiveBuilder, resolve_archive};
use obz_format::{Manifest, ReaderConfig};
use tempfile::TempDir;

fn write_fixture(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("fixture.obz");
    std::fs::write(&path, fixtures::archive_bytes()).unwrap();
    path
}

#[test]
fn CheckReport___new___collects_every_problem() {
    let report = CheckReport::new(&fixtures::graph(), true);

    let skipped: Vec<_> = report.skipped.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(skipped, vec!["drinks", "broken"]);
    assert_eq!(report.dangling.len(), 1);
    assert_eq!(report.dangling[0].button_id, "drinks");
    assert_eq!(
        report.unresolved_images,
        vec![UnresolvedImage {
            board_id: "home".into(),
            image_id: "2".into(),
            path: "images/2.png".into()
        }]
    );
    assert_eq!(report.problem_count(), 4);
}

#[test]
fn CheckReport___root_outside_board_map___reports_its_pending_images() {
    let manifest = Manifest::from_json(
        r#"{"format": "open-board-0.1", "root": "start.obf", "paths": {"boards": {}}}"#,
    )
    .unwrap();
    let bytes = ArchiveBuilder::new()
        .manifest(manifest)
        .add_bytes(
            "start.obf",
            br#"{"id": "start", "grid": {"order": [["a"]]},
                 "buttons": [{"id": "a", "label": "A", "image_id": "9"}],
                 "images": [{"id": "9", "content_type": "image/png", "path": "images/9.png"}]}"#
                .to_vec(),
        )
        .to_bytes()
        .unwrap();
    let graph = resolve_archive(&bytes).unwrap();

    let report = CheckReport::new(&graph, true);

    assert_eq!(
        report.unresolved_images,
        vec![UnresolvedImage {
            board_id: "start".into(),
            image_id: "9".into(),
            path: "images/9.png".into()
        }]
    );
}

#[test]
fn CheckReport___inlining_disabled___ignores_pending_images() {
    let report = CheckReport::new(&fixtures::graph(), false);

    assert!(report.unresolved_images.is_empty());
}

#[test]
fn CheckReport___to_text___lists_problems() {
    let text = CheckReport::new(&fixtures::graph(), true).to_text();

    assert!(text.contains("board drinks (boards/drinks.obf): entry missing"));
    assert!(text.contains("board broken (boards/broken.obf): invalid:"));
    assert!(text.contains("board home: button drinks links nowhere (id=drinks path=boards/drinks.obf)"));
    assert!(text.contains("board home: image 2 not found at images/2.png"));
    assert!(text.ends_with("4 problem(s) found\n"));
}

#[test]
fn CheckReport___clean_graph___reports_none() {
    let graph = obz_archive::resolve_standalone(
        r#"{"id": "solo", "grid": {"order": [["a"]]}, "buttons": [{"id": "a", "label": "A"}]}"#,
    )
    .unwrap();

    let report = CheckReport::new(&graph, true);

    assert!(report.is_clean());
    assert_eq!(report.to_text(), "no problems found\n");
}

#[test]
fn run___problems_without_strict___succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(&temp_dir);

    let result = run(&ArchiveResolver::new(ReaderConfig::default()), &path, false, false);

    assert!(result.is_ok());
}

#[test]
fn run___problems_with_strict___fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(&temp_dir);

    let err = run(&ArchiveResolver::default(), &path, true, false).unwrap_err();

    assert!(err.to_string().contains("4 problem(s)"));
}

#[test]
fn run___unreadable_file___fails_with_context() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("garbage.obz");
    std::fs::write(&path, b"not a zip").unwrap();

    let err = run(&ArchiveResolver::default(), &path, false, false).unwrap_err();

    assert!(err.to_string().starts_with("Failed to load"));
}

#[test]
fn CheckReport___serializes_reasons_and_targets() {
    let json = serde_json::to_value(CheckReport::new(&fixtures::graph(), true)).unwrap();

    assert_eq!(json["skipped"][0]["reason"]["kind"], "missing_entry");
    assert_eq!(json["skipped"][1]["reason"]["kind"], "invalid");
    assert_eq!(json["dangling"][0]["target"]["id"], "drinks");
    assert_eq!(json["unresolved_images"][0]["path"], "images/2.png");
}

#[test]
fn run___json_output___succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(&temp_dir);

    assert!(run(&ArchiveResolver::default(), &path, false, true).is_ok());
}
