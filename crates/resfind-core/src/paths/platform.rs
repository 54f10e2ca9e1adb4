//! Platform-specific path detection.
//!
//! Documents-directory discovery and user path expansion. OS differences are
//! delegated to `dirs`; public API is exposed through sibling modules.

use std::env;
use std::path::PathBuf;

use super::error::PathError;
use crate::ports::UserDirectoryPort;

/// Environment variable that overrides the platform documents directory.
pub const DOCUMENTS_DIR_ENV: &str = "RESFIND_DOCUMENTS_DIR";

/// Documents directory lookup backed by the operating system.
///
/// Resolution order:
/// 1. `RESFIND_DOCUMENTS_DIR` environment variable (highest priority)
/// 2. The platform documents folder (e.g. `~/Documents`, `FOLDERID_Documents`)
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformUserDirectory;

impl UserDirectoryPort for PlatformUserDirectory {
    fn default_user_directory(&self) -> Option<PathBuf> {
        if let Ok(path) = env::var(DOCUMENTS_DIR_ENV) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path.trim()));
            }
        }

        dirs::document_dir()
    }
}

/// Expand a user-provided search directory, resolving a leading `~`.
///
/// Relative paths stay relative: they are probed against the working
/// directory at resolution time, exactly as written.
pub(super) fn expand_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    if trimmed == "~" {
        return dirs::home_dir().ok_or(PathError::NoHomeDir);
    }

    if let Some(rest) = trimmed
        .strip_prefix("~/")
        .or_else(|| trimmed.strip_prefix("~\\"))
    {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        return Ok(home.join(rest));
    }

    Ok(PathBuf::from(trimmed))
}
