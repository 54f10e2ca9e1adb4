//! Path-related error types.
//!
//! Provides semantic errors for search-path configuration without exposing
//! implementation details. None of these abort a configuration update; the
//! registry reports them through the diagnostic sink instead.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while preparing or registering search directories.
#[derive(Debug, Error)]
pub enum PathError {
    /// Could not determine the user's home directory.
    #[error("Cannot determine home directory")]
    NoHomeDir,

    /// A path was expected to be a directory but was not.
    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// Failed to create a directory.
    #[error("Failed to create directory {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },

    /// An empty path was provided.
    #[error("Path cannot be empty")]
    EmptyPath,

    /// A directory reference cannot be used as a lookup root.
    #[error("Malformed directory reference {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },
}
