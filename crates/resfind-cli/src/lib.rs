#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

//! `resfind` command-line adapter.

// Silence unused dev-dependency warnings; tempfile is only used in unit tests
#[cfg(test)]
use tempfile as _;

// Used by main.rs
use dotenvy as _;
use tracing as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
