//! Candidate probing shared by the resolver and the directory bundle.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// Join a logical name onto a search directory.
///
/// Leading separators on the name are stripped so an absolute-looking name
/// still lands under `dir` instead of replacing it.
pub fn join_logical(dir: &Path, logical_name: &str) -> PathBuf {
    dir.join(logical_name.trim_start_matches(['/', '\\']))
}

/// Open `path` for reading, treating directories as misses.
pub(crate) fn open_readable(path: &Path) -> io::Result<File> {
    let file = File::open(path)?;
    if file.metadata()?.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is a directory", path.display()),
        ));
    }
    Ok(file)
}
