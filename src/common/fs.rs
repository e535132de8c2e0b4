//! Common file system operations

use std::fs;
use std::io;
use std::path::Path;

/// Remove a file if it exists; returns whether it was removed
pub fn remove_file_if_exists(path: &Path) -> io::Result<bool> {
    if path.is_file() {
        fs::remove_file(path)?;
        return Ok(true);
    }
    Ok(false)
}

/// Remove a directory tree if it exists; returns whether it was removed
pub fn remove_dir_if_exists(path: &Path) -> io::Result<bool> {
    if path.is_dir() {
        fs::remove_dir_all(path)?;
        return Ok(true);
    }
    Ok(false)
}

/// Total size of all files under a directory
pub fn dir_size(path: &Path) -> io::Result<u64> {
    let mut total = 0;
    for entry in walkdir::WalkDir::new(path) {
        let entry = entry.map_err(io::Error::other)?;
        if entry.file_type().is_file() {
            total += entry.metadata().map_err(io::Error::other)?.len();
        }
    }
    Ok(total)
}
