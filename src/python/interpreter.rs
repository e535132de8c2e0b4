//! Bootstrap interpreter discovery

use std::path::{Path, PathBuf};

use crate::error::{Result, python};

#[cfg(windows)]
const PYTHON_CANDIDATES: &[&str] = &["python"];

#[cfg(not(windows))]
const PYTHON_CANDIDATES: &[&str] = &["python3", "python"];

/// Known install locations probed when PATH lookup fails
#[cfg(windows)]
const FALLBACK_INSTALL_PATHS: &[&str] = &[
    r"C:\Python310\python.exe",
    r"C:\Program Files\Python310\python.exe",
];

#[cfg(not(windows))]
const FALLBACK_INSTALL_PATHS: &[&str] = &["/usr/local/bin/python3", "/usr/bin/python3"];

/// Find an interpreter suitable for bootstrapping the venv
///
/// Searches PATH first, then a fixed set of known install locations.
pub fn find_python() -> Result<PathBuf> {
    for candidate in PYTHON_CANDIDATES {
        if let Ok(path) = which::which(candidate) {
            return Ok(path);
        }
    }

    for fallback in FALLBACK_INSTALL_PATHS {
        let path = Path::new(fallback);
        if path.exists() {
            return Ok(path.to_path_buf());
        }
    }

    Err(python::not_found(PYTHON_CANDIDATES.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_are_not_empty() {
        assert!(!PYTHON_CANDIDATES.is_empty());
    }

    #[test]
    fn test_not_found_error_names_candidates() {
        let err = python::not_found(PYTHON_CANDIDATES.join(", "));
        let msg = err.to_string();
        for candidate in PYTHON_CANDIDATES {
            assert!(msg.contains(candidate));
        }
    }
}
