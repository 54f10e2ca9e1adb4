//! Directory creation utilities.

use std::fs;
use std::path::Path;

use super::error::PathError;

/// Ensure the provided directory exists, creating it and any missing parents.
///
/// Returns `Ok(true)` if the directory was created by this call.
/// An existing path that is not a directory is an error.
pub fn ensure_directory(path: &Path) -> Result<bool, PathError> {
    if path.as_os_str().is_empty() {
        return Err(PathError::EmptyPath);
    }

    if path.exists() {
        if !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
        return Ok(false);
    }

    fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_missing_parents() {
        let temp = tempdir().unwrap();
        let nested = temp.path().join("a").join("b").join("c");

        let created = ensure_directory(&nested).unwrap();

        assert!(created);
        assert!(nested.is_dir());
    }

    #[test]
    fn existing_directory_is_left_alone() {
        let temp = tempdir().unwrap();
        assert!(!ensure_directory(temp.path()).unwrap());
    }

    #[test]
    fn empty_path_is_rejected() {
        assert!(matches!(
            ensure_directory(Path::new("")),
            Err(PathError::EmptyPath)
        ));
    }

    #[test]
    fn file_in_the_way_is_rejected() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("plain.txt");
        fs::write(&file, b"x").unwrap();

        let err = ensure_directory(&file).unwrap_err();
        assert!(matches!(err, PathError::NotADirectory(_)));
    }
}
