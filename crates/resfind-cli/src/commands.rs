//! Commands enum for the CLI tool.

use std::path::PathBuf;

use clap::Subcommand;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the effective search paths and registered bundled roots
    Paths,

    /// Resolve a logical name and print where it was found
    Find {
        /// Logical resource name (e.g. "config.json")
        name: String,
    },

    /// Resolve a JSON resource and print its parsed contents
    Show {
        /// Logical resource name
        name: String,
    },

    /// Resolve a resource and save a copy of it
    Copy {
        /// Logical resource name
        name: String,
        /// Destination file (overwritten if present)
        dest: PathBuf,
    },
}
