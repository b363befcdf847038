//! `obz check` - load a file and report problems

use anyhow::{Context, Result, bail};
use obz_archive::{ArchiveResolver, BoardGraph, DanglingLink, SkipReason, SkippedBoard};
use obz_logging::EventTally;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;

/// An image whose archive path did not resolve during inlining.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedImage {
    pub board_id: String,
    pub image_id: String,
    pub path: String,
}

/// Problems found in a loaded graph.
#[derive(Debug, Default, Serialize)]
pub struct CheckReport {
    pub skipped: Vec<SkippedBoard>,
    pub dangling: Vec<DanglingLink>,
    pub unresolved_images: Vec<UnresolvedImage>,
}

impl CheckReport {
    /// Collect problems; pending images only count when inlining was enabled.
    pub fn new(graph: &BoardGraph, images_inlined: bool) -> Self {
        let unresolved_images = if images_inlined {
            graph
                .all_boards()
                .flat_map(|board| {
                    board.pending_images().map(|image| UnresolvedImage {
                        board_id: board.id.clone(),
                        image_id: image.id.clone(),
                        path: image.path.clone().unwrap_or_default(),
                    })
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            skipped: graph.skipped().to_vec(),
            dangling: graph.dangling_links(),
            unresolved_images,
        }
    }

    pub fn problem_count(&self) -> usize {
        self.skipped.len() + self.dangling.len() + self.unresolved_images.len()
    }

    pub fn is_clean(&self) -> bool {
        self.problem_count() == 0
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();

        for skipped in &self.skipped {
            let reason = match &skipped.reason {
                SkipReason::MissingEntry => "entry missing".to_string(),
                SkipReason::Invalid(reason) => format!("invalid: {reason}"),
            };
            let _ = writeln!(out, "board {} ({}): {reason}", skipped.id, skipped.path);
        }
        for link in &self.dangling {
            let _ = writeln!(
                out,
                "board {}: button {} links nowhere ({})",
                link.board_id, link.button_id, link.target
            );
        }
        for image in &self.unresolved_images {
            let _ = writeln!(
                out,
                "board {}: image {} not found at {}",
                image.board_id, image.image_id, image.path
            );
        }

        if self.is_clean() {
            out.push_str("no problems found\n");
        } else {
            let _ = writeln!(out, "{} problem(s) found", self.problem_count());
        }
        out
    }
}

/// Check command implementation
pub fn run(resolver: &ArchiveResolver, file: &Path, strict: bool, json: bool) -> Result<()> {
    let before = EventTally::global().snapshot();

    let graph = resolver
        .load_file(file)
        .with_context(|| format!("Failed to load {}", file.display()))?;

    let report = CheckReport::new(&graph, resolver.config().inline_images);
    let logged = EventTally::global().since(before);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Checking: {}", file.display());
        print!("{}", report.to_text());
    }
    if !json && !logged.is_clean() {
        println!(
            "{} warning(s) and {} error(s) logged during load",
            logged.warnings, logged.errors
        );
    }

    if strict && !report.is_clean() {
        bail!("{} problem(s) found in {}", report.problem_count(), file.display());
    }

    Ok(())
}

#[cfg(test)]
#[path = "check/check_tests.rs"]
mod check_tests;
