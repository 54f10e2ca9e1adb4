//! Resolution and resource error types.
//!
//! Only `ResolveError` is ever returned to callers. `ResourceError` values are
//! masked by the handle (logged and kept as `last_error`) so callers get a
//! degraded result instead of a failure.

use std::io;
use thiserror::Error;

/// The sole failure mode of resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No tier (working directory, search paths, bundled) had the name.
    #[error("Resource not found: {name}")]
    NotFound { name: String },
}

impl ResolveError {
    /// The logical name that could not be resolved.
    pub fn name(&self) -> &str {
        match self {
            Self::NotFound { name } => name,
        }
    }
}

/// Failures downstream of a successful resolution.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The content is not a JSON object.
    #[error("Malformed structured data in {location}: {reason}")]
    Content { location: String, reason: String },

    /// Reading the resource or writing a copy failed.
    #[error("I/O error on {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: io::Error,
    },

    /// The destination of a copy is the file the resource was read from.
    #[error("Refusing to copy {location} onto itself")]
    SameFile { location: String },

    /// The stream was already released.
    #[error("Resource {location} is already closed")]
    Closed { location: String },
}
