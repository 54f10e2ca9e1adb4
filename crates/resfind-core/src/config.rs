//! Resolver configuration.
//!
//! Pure configuration types with no infrastructure dependencies. Hosts build
//! a `ResolverConfig` from the environment, a settings file or CLI flags and
//! hand it to the search-path registry once at startup.

use std::env;

use serde::{Deserialize, Serialize};

/// Default application subdirectory appended to the user documents location.
pub const DEFAULT_APP_DIR_NAME: &str = "resfind";

/// Delimiter between directories in a raw search-path string.
pub const SEARCH_PATH_DELIMITER: char = ';';

/// Environment variable holding the raw search-path string.
pub const SEARCH_PATH_ENV: &str = "RESFIND_SEARCH_PATH";

/// Environment variable overriding the application subdirectory name.
pub const APP_DIR_ENV: &str = "RESFIND_APP_DIR";

/// Configuration for search-path discovery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ResolverConfig {
    /// Subdirectory of the documents location used when no search path is set.
    pub app_dir_name: String,

    /// Raw `;`-delimited search path. `None` keeps the derived default.
    pub search_path: Option<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            app_dir_name: DEFAULT_APP_DIR_NAME.to_string(),
            search_path: None,
        }
    }
}

impl ResolverConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            app_dir_name: non_blank(APP_DIR_ENV)
                .map_or_else(|| DEFAULT_APP_DIR_NAME.to_string(), |v| v.trim().to_string()),
            search_path: non_blank(SEARCH_PATH_ENV),
        }
    }

    /// Override the raw search path.
    #[must_use]
    pub fn with_search_path(mut self, raw: impl Into<String>) -> Self {
        self.search_path = Some(raw.into());
        self
    }

    /// Override the application subdirectory name.
    #[must_use]
    pub fn with_app_dir_name(mut self, name: impl Into<String>) -> Self {
        self.app_dir_name = name.into();
        self
    }
}
