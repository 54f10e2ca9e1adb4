//! Diagnostic sink port for non-fatal failures.
//!
//! Masked parse errors, failed copies and configuration warnings never reach
//! callers as errors. They are reported here instead, so hosts can route them
//! to their own logging and tests can assert on them.

use std::error::Error;
use std::fmt;
use std::sync::{Mutex, PoisonError};

/// Severity of a diagnostic record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        };
        f.write_str(label)
    }
}

/// Port for recording non-fatal failures.
///
/// Implementations should be thread-safe and must not panic.
pub trait DiagnosticSink: Send + Sync {
    /// Record a message with an optional underlying cause.
    fn log(&self, severity: Severity, message: &str, cause: Option<&(dyn Error + 'static)>);
}

/// Default sink that forwards records to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn log(&self, severity: Severity, message: &str, cause: Option<&(dyn Error + 'static)>) {
        match (severity, cause) {
            (Severity::Debug, Some(cause)) => tracing::debug!(error = %cause, "{message}"),
            (Severity::Debug, None) => tracing::debug!("{message}"),
            (Severity::Info, Some(cause)) => tracing::info!(error = %cause, "{message}"),
            (Severity::Info, None) => tracing::info!("{message}"),
            (Severity::Warning, Some(cause)) => tracing::warn!(error = %cause, "{message}"),
            (Severity::Warning, None) => tracing::warn!("{message}"),
            (Severity::Error, Some(cause)) => tracing::error!(error = %cause, "{message}"),
            (Severity::Error, None) => tracing::error!("{message}"),
        }
    }
}

/// A record captured by `RecordingSink`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticRecord {
    pub severity: Severity,
    pub message: String,
    pub cause: Option<String>,
}

/// Sink that keeps every record in memory.
///
/// Useful for tests and for hosts that surface warnings in their own UI.
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<DiagnosticRecord>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn records(&self) -> Vec<DiagnosticRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Records at or above `severity`.
    pub fn at_least(&self, severity: Severity) -> Vec<DiagnosticRecord> {
        self.records()
            .into_iter()
            .filter(|record| record.severity >= severity)
            .collect()
    }
}

impl DiagnosticSink for RecordingSink {
    fn log(&self, severity: Severity, message: &str, cause: Option<&(dyn Error + 'static)>) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(DiagnosticRecord {
                severity,
                message: message.to_string(),
                cause: cause.map(ToString::to_string),
            });
    }
}
