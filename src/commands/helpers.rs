//! Shared command helpers

use std::path::{Path, PathBuf};

use crate::error::{Result, VoicepackError, config};

/// Resolve the project root from the CLI argument or current directory
pub fn resolve_project_root(project: Option<PathBuf>) -> Result<PathBuf> {
    let path = match project {
        Some(path) => path,
        None => std::env::current_dir().map_err(|e| VoicepackError::IoError {
            message: format!("Failed to get current directory: {e}"),
        })?,
    };

    if !path.is_dir() {
        return Err(config::project_not_found(path.display().to_string()));
    }

    // Canonicalize so archive naming sees the real directory name, without
    // Windows \\?\ prefixes leaking into output
    Ok(dunce::canonicalize(&path).unwrap_or(path))
}

/// Directory name the project archive is named after
pub fn project_display_name(project_root: &Path) -> String {
    project_root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "project".to_string())
}
