//! Directory-backed bundled provider.
//!
//! Holds the directories registered by the search-path registry and looks up
//! logical names under each of them, in registration order. Registration is
//! additive: roots from earlier configurations stay registered.

use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use crate::paths::probe::{join_logical, open_readable};
use crate::paths::PathError;
use crate::ports::{BundledResourceProvider, ResourceStream};

/// Bundled provider that searches a growing list of root directories.
#[derive(Debug, Default)]
pub struct DirectoryBundle {
    roots: RwLock<Vec<PathBuf>>,
}

impl DirectoryBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `dir` as a lookup root.
    ///
    /// Returns `Ok(false)` if the root was already registered. Missing
    /// directories are accepted since they may be created later; references
    /// that can never act as a root are rejected.
    pub fn register(&self, dir: &Path) -> Result<bool, PathError> {
        let raw = dir.as_os_str();
        if raw.is_empty() {
            return Err(PathError::EmptyPath);
        }
        if raw.to_string_lossy().contains('\0') {
            return Err(PathError::Malformed {
                path: dir.to_path_buf(),
                reason: "contains a NUL byte".to_string(),
            });
        }
        if dir.exists() && !dir.is_dir() {
            return Err(PathError::NotADirectory(dir.to_path_buf()));
        }

        let mut roots = self.roots.write().unwrap_or_else(PoisonError::into_inner);
        if roots.iter().any(|root| root == dir) {
            return Ok(false);
        }
        roots.push(dir.to_path_buf());
        Ok(true)
    }

    /// Registered roots, in lookup order.
    pub fn roots(&self) -> Vec<PathBuf> {
        self.roots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl BundledResourceProvider for DirectoryBundle {
    fn load_bundled(&self, name: &str) -> Option<ResourceStream> {
        let roots = self.roots.read().unwrap_or_else(PoisonError::into_inner);
        roots.iter().find_map(|root| {
            let candidate = join_logical(root, name);
            match open_readable(&candidate) {
                Ok(file) => Some(Box::new(file) as ResourceStream),
                Err(e) => {
                    tracing::trace!(path = %candidate.display(), error = %e, "bundled root miss");
                    None
                }
            }
        })
    }
}
