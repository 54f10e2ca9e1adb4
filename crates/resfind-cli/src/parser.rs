//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for inspecting layered resource lookup.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "resfind")]
#[command(about = "Find resources across the working directory, user search paths and bundled defaults")]
#[command(version)]
pub struct Cli {
    /// Semicolon-separated search directories (overrides the documents default)
    #[arg(long = "search-path", global = true, env = "RESFIND_SEARCH_PATH")]
    pub search_path: Option<String>,

    /// Application subdirectory under the user's documents folder
    #[arg(long = "app-dir", global = true, env = "RESFIND_APP_DIR")]
    pub app_dir: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
