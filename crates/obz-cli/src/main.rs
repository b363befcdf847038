//! obz CLI - Read Open Board archives from the terminal
//!
//! Commands:
//! - `obz inspect` - Summarize an archive's manifest and boards
//! - `obz show` - Print a board's grid as text
//! - `obz follow` - Press buttons in turn, starting at the root board
//! - `obz check` - Report dangling links, skipped boards and unresolved images

use anyhow::Context;
use clap::{Parser, Subcommand};
use obz_archive::ArchiveResolver;
use std::path::PathBuf;

mod check;
mod config;
mod follow;
mod inspect;
mod show;

#[cfg(test)]
mod fixtures;

#[derive(Parser)]
#[command(name = "obz")]
#[command(author, version, about = "Reader for Open Board (.obz/.obf) files", long_about = None)]
struct Cli {
    /// Reader configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off); overrides the config file
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize an archive: format, digest, root and boards
    Inspect {
        /// Path to a .obz archive or .obf board
        file: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a board grid as text
    Show {
        /// Path to a .obz archive or .obf board
        file: PathBuf,

        /// Board id to show (default: the root board)
        #[arg(short, long)]
        board: Option<String>,
    },

    /// Starting at the root, press each button id in turn (or `back`)
    Follow {
        /// Path to a .obz archive or .obf board
        file: PathBuf,

        /// Button ids to press, in order
        #[arg(required = true)]
        targets: Vec<String>,
    },

    /// Load a file and report problems
    Check {
        /// Path to a .obz archive or .obf board
        file: PathBuf,

        /// Exit with an error when any problem is reported
        #[arg(long)]
        strict: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = config::load(cli.config.as_deref(), cli.log_level.as_deref())?;
    obz_logging::init_logging(config.level()?);

    let resolver = ArchiveResolver::new(config);

    match cli.command {
        Commands::Inspect { file, json } => {
            let graph = load(&resolver, &file)?;
            inspect::run(&graph, json)?;
        }
        Commands::Show { file, board } => {
            let graph = load(&resolver, &file)?;
            show::run(&graph, board.as_deref())?;
        }
        Commands::Follow { file, targets } => {
            let graph = load(&resolver, &file)?;
            follow::run(graph, resolver.config(), &targets);
        }
        Commands::Check { file, strict, json } => {
            check::run(&resolver, &file, strict, json)?;
        }
    }

    Ok(())
}

fn load(resolver: &ArchiveResolver, file: &std::path::Path) -> anyhow::Result<obz_archive::BoardGraph> {
    resolver
        .load_file(file)
        .with_context(|| format!("Failed to load {}", file.display()))
}
