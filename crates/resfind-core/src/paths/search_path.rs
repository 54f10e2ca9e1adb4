//! User search-path registry.
//!
//! Holds the ordered list of directories consulted before bundled resources,
//! derives a default from the user documents location on first use, and
//! registers every configured directory as a bundled lookup root.

use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

use super::ensure::ensure_directory;
use super::platform::{PlatformUserDirectory, expand_user_path};
use crate::bundled::DirectoryBundle;
use crate::config::{ResolverConfig, SEARCH_PATH_DELIMITER};
use crate::ports::{DiagnosticSink, Severity, TracingSink, UserDirectoryPort};

/// Ordered user search directories plus the bundled roots they feed.
///
/// Configure once at startup, then share behind an `Arc`. Concurrent
/// reconfiguration while other threads resolve is memory safe but the
/// interleaving of old and new lists is unspecified.
pub struct SearchPathRegistry {
    directories: RwLock<Option<Vec<PathBuf>>>,
    app_dir_name: String,
    user_dir: Arc<dyn UserDirectoryPort>,
    bundle: Arc<DirectoryBundle>,
    sink: Arc<dyn DiagnosticSink>,
}

impl SearchPathRegistry {
    /// Create an unconfigured registry.
    pub fn new(
        config: &ResolverConfig,
        user_dir: Arc<dyn UserDirectoryPort>,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            directories: RwLock::new(None),
            app_dir_name: config.app_dir_name.clone(),
            user_dir,
            bundle: Arc::new(DirectoryBundle::new()),
            sink,
        }
    }

    /// Registry using the OS documents lookup and `tracing` for diagnostics,
    /// with `config.search_path` already applied.
    pub fn with_platform_defaults(config: &ResolverConfig) -> Self {
        let registry = Self::new(
            config,
            Arc::new(PlatformUserDirectory),
            Arc::new(TracingSink),
        );
        registry.configure_from(config);
        registry
    }

    /// Apply the raw search path carried by `config`, if any.
    pub fn configure_from(&self, config: &ResolverConfig) -> bool {
        self.set_search_paths(config.search_path.as_deref())
    }

    /// The ordered search directories.
    ///
    /// When nothing was configured, derives `<documents>/<app_dir_name>` and
    /// applies it like an explicit configuration. If the documents location
    /// is unknown the list is empty. Either outcome is kept until the next
    /// explicit configuration.
    pub fn search_paths(&self) -> Vec<PathBuf> {
        if let Some(dirs) = self
            .directories
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return dirs.clone();
        }

        let mut guard = self
            .directories
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(dirs) = guard.as_ref() {
            return dirs.clone();
        }

        if let Some(documents) = self.user_dir.default_user_directory() {
            let default = documents.join(&self.app_dir_name);
            tracing::debug!(path = %default.display(), "deriving default search path");
            self.commit(&mut guard, vec![default]);
        } else {
            tracing::debug!("documents directory unavailable, search path left empty");
            *guard = Some(Vec::new());
        }

        guard.as_ref().cloned().unwrap_or_default()
    }

    /// Replace the search directories with a `;`-delimited list.
    ///
    /// Absent or blank input keeps the current configuration and returns
    /// `false`. Otherwise the first directory is created if missing, every
    /// directory is registered as a bundled root and the list is committed.
    /// Preparation failures are reported to the diagnostic sink and never
    /// prevent the commit.
    pub fn set_search_paths(&self, raw: Option<&str>) -> bool {
        let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
            tracing::debug!("empty search path ignored");
            return false;
        };

        let dirs = self.parse(raw);
        if dirs.is_empty() {
            tracing::debug!(raw, "search path has no usable entries, ignored");
            return false;
        }

        let mut guard = self
            .directories
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        self.commit(&mut guard, dirs);
        true
    }

    /// Directory provider fed by this registry.
    pub fn bundle(&self) -> Arc<DirectoryBundle> {
        Arc::clone(&self.bundle)
    }

    /// Every directory registered as a bundled root so far.
    pub fn bundled_roots(&self) -> Vec<PathBuf> {
        self.bundle.roots()
    }

    /// Sink receiving this registry's configuration warnings.
    pub fn sink(&self) -> Arc<dyn DiagnosticSink> {
        Arc::clone(&self.sink)
    }

    fn parse(&self, raw: &str) -> Vec<PathBuf> {
        raw.split(SEARCH_PATH_DELIMITER)
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                expand_user_path(entry).unwrap_or_else(|e| {
                    self.sink.log(
                        Severity::Warning,
                        &format!("Cannot expand search directory {entry}, using it verbatim"),
                        Some(&e),
                    );
                    PathBuf::from(entry)
                })
            })
            .collect()
    }

    fn commit(&self, slot: &mut Option<Vec<PathBuf>>, dirs: Vec<PathBuf>) {
        if let Some(first) = dirs.first() {
            match ensure_directory(first) {
                Ok(true) => tracing::info!(path = %first.display(), "created search directory"),
                Ok(false) => {}
                Err(e) => self.sink.log(
                    Severity::Warning,
                    &format!("Cannot prepare search directory {}", first.display()),
                    Some(&e),
                ),
            }
        }

        for dir in &dirs {
            if let Err(e) = self.bundle.register(dir) {
                self.sink.log(
                    Severity::Warning,
                    &format!("Adding {} to bundled roots", dir.display()),
                    Some(&e),
                );
            }
        }

        tracing::info!(count = dirs.len(), "search paths configured");
        *slot = Some(dirs);
    }
}

impl fmt::Debug for SearchPathRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchPathRegistry")
            .field("directories", &self.directories)
            .field("app_dir_name", &self.app_dir_name)
            .field("bundle", &self.bundle)
            .finish_non_exhaustive()
    }
}
