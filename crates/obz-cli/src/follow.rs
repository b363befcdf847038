//! `obz follow` - scripted navigation from the root board

use obz_archive::{BoardGraph, Press, Session};
use obz_format::{Board, ReaderConfig};

/// Step name that pops the history instead of pressing a button.
pub const BACK: &str = "back";

/// Follow command implementation
pub fn run(graph: BoardGraph, config: &ReaderConfig, steps: &[String]) {
    let session = Session::new(graph).with_history_limit(config.board_history_limit);
    for line in walk(session, steps) {
        println!("{line}");
    }
}

/// Press each step in turn and describe what happened, one line per step
/// after a first line naming the starting board.
pub fn walk(mut session: Session, steps: &[String]) -> Vec<String> {
    let mut lines = vec![format!("start: {}", describe(session.current()))];

    for step in steps {
        let line = if step == BACK {
            match session.back() {
                Some(board) => format!("back: {}", describe(&board)),
                None => "back: no history".to_string(),
            }
        } else {
            match session.press(step) {
                Press::Navigated(board) => format!("{step}: -> {}", describe(&board)),
                Press::Speak(text) => format!("{step}: says \"{text}\""),
                Press::Dangling(target) => format!(
                    "{step}: dangling link ({target}), staying on {}",
                    describe(session.current())
                ),
                Press::UnknownButton(_) => {
                    format!("{step}: no such button on {}", describe(session.current()))
                }
            }
        };
        lines.push(line);
    }

    lines
}

fn describe(board: &Board) -> String {
    if board.name.is_empty() {
        board.id.clone()
    } else {
        format!("{} ({})", board.name, board.id)
    }
}

#[cfg(test)]
#[path = "follow/follow_tests.rs"]
mod follow_tests;
