//! Port definitions (trait abstractions) for external collaborators.
//!
//! Ports define the interfaces the resolver expects from its surroundings.
//!
//! # Design Rules
//!
//! - One capability per trait, kept as narrow as the resolver needs
//! - No platform details in any signature
//! - Every port has at least one in-crate implementation usable in tests

pub mod bundled;
pub mod diagnostics;
pub mod user_directory;

pub use bundled::{BundledResourceProvider, ResourceStream};
pub use diagnostics::{DiagnosticRecord, DiagnosticSink, RecordingSink, Severity, TracingSink};
pub use user_directory::{FixedUserDirectory, UserDirectoryPort};

#[cfg(test)]
pub use user_directory::MockUserDirectoryPort;
