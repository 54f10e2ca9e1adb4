//! Search-path configuration and directory utilities.
//!
//! This module owns everything about *where* resources may live:
//! - The user search-path registry and its derived default
//! - Documents-directory discovery
//! - Directory creation for the first search directory
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately
//! - OS-specific logic is kept private in `platform`

mod ensure;
mod error;
mod platform;
pub(crate) mod probe;
mod search_path;

// Error type
pub use error::PathError;

// Platform detection
pub use platform::{DOCUMENTS_DIR_ENV, PlatformUserDirectory};

// Directory operations
pub use ensure::ensure_directory;

// Candidate paths
pub use probe::join_logical;

// Registry
pub use search_path::SearchPathRegistry;
