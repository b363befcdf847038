use super::*;
use obz_format::decode_board;
use proptest::prelude::*;
use serde_json::json;

fn plain_board(id: &str) -> Arc<Board> {
    let doc = json!({"id": id, "grid": {"order": []}, "buttons": []});
    Arc::new(decode_board(&doc.to_string()).unwrap())
}

fn build_graph(entries: &[(String, String, String)]) -> BoardGraph {
    let mut paths = serde_json::Map::new();
    let mut boards = IndexMap::new();
    for (key, path, board_id) in entries {
        paths.insert(key.clone(), json!(path));
        boards.insert(key.clone(), plain_board(board_id));
    }
    let manifest = Manifest::from_json(
        &json!({"root": "root.obf", "paths": {"boards": paths}}).to_string(),
    )
    .unwrap();
    BoardGraph::from_parts(manifest, boards, plain_board("root"))
}

fn entry() -> impl Strategy<Value = (String, String, String)> {
    ("[a-c]{1,2}", "[a-c/]{0,4}", "[a-c]{1,2}")
}

fn target() -> impl Strategy<Value = LinkTarget> {
    (
        proptest::option::of("[a-c]{0,2}"),
        proptest::option::of("[a-c/]{0,4}"),
    )
        .prop_map(|(id, path)| LinkTarget::new(id, path))
}

proptest! {
    #[test]
    fn resolve_link_is_deterministic(
        entries in proptest::collection::vec(entry(), 0..6),
        target in target(),
    ) {
        let graph = build_graph(&entries);

        let first = graph.resolve_link_with_tier(&target);
        let second = graph.resolve_link_with_tier(&target);

        prop_assert_eq!(first.is_some(), second.is_some());
        if let (Some((a, tier_a)), Some((b, tier_b))) = (first, second) {
            prop_assert!(Arc::ptr_eq(&a, &b));
            prop_assert_eq!(tier_a, tier_b);
        }
    }

    #[test]
    fn resolved_board_is_loaded_or_root(
        entries in proptest::collection::vec(entry(), 0..6),
        target in target(),
    ) {
        let graph = build_graph(&entries);

        if let Some(board) = graph.resolve_link(&target) {
            let known = graph.boards().values().any(|b| Arc::ptr_eq(b, &board))
                || Arc::ptr_eq(graph.root(), &board);
            prop_assert!(known);
        }
    }

    #[test]
    fn exact_manifest_match_always_wins(
        entries in proptest::collection::vec(entry(), 1..6),
        pick in any::<proptest::sample::Index>(),
    ) {
        let graph = build_graph(&entries);
        let (key, board) = graph.boards().get_index(pick.index(graph.len())).unwrap();

        if board.id == *key {
            let (resolved, tier) = graph
                .resolve_link_with_tier(&LinkTarget::by_id(key.clone()))
                .unwrap();
            prop_assert!(Arc::ptr_eq(&resolved, board));
            prop_assert_eq!(tier, LinkTier::IdExact);
        }
    }
}
