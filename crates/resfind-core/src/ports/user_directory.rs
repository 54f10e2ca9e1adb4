//! User documents directory port.
//!
//! Abstracts discovery of the per-user documents location so the search-path
//! registry does not depend on any one platform's configuration store.

use std::path::PathBuf;

/// Port for discovering the user's documents directory.
///
/// # Implementations
///
/// - `PlatformUserDirectory` - OS lookup with an environment override
/// - `FixedUserDirectory` - a predetermined answer, for tests and embedding
#[cfg_attr(test, mockall::automock)]
pub trait UserDirectoryPort: Send + Sync {
    /// The documents directory, or `None` when it cannot be determined.
    fn default_user_directory(&self) -> Option<PathBuf>;
}

/// A user directory port that always answers with the same value.
#[derive(Debug, Clone, Default)]
pub struct FixedUserDirectory(Option<PathBuf>);

impl FixedUserDirectory {
    /// Always report `path` as the documents directory.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(Some(path.into()))
    }

    /// Always report that no documents directory exists.
    pub const fn unavailable() -> Self {
        Self(None)
    }
}

impl UserDirectoryPort for FixedUserDirectory {
    fn default_user_directory(&self) -> Option<PathBuf> {
        self.0.clone()
    }
}
