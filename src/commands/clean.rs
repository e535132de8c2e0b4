//! Clean command implementation
//!
//! Deletes deprecated helper scripts and transient build directories after
//! an interactive confirmation. Deletion is immediate and per-item; a
//! failed removal is reported and counted but does not stop the rest.

use std::path::PathBuf;

use inquire::Confirm;

use crate::cli::CleanArgs;
use crate::commands::helpers;
use crate::common::fs::{remove_dir_if_exists, remove_file_if_exists};
use crate::config;
use crate::error::{Result, VoicepackError};
use crate::ui::display;

/// Run clean command
pub fn run(project: Option<PathBuf>, args: CleanArgs) -> Result<()> {
    let project_root = helpers::resolve_project_root(project)?;
    let manifest = config::load_manifest(&project_root)?;

    let files: Vec<PathBuf> = manifest
        .clean
        .deprecated_files
        .iter()
        .map(|name| project_root.join(name))
        .filter(|path| path.is_file())
        .collect();
    let dirs: Vec<PathBuf> = manifest
        .clean
        .transient_dirs
        .iter()
        .map(|name| project_root.join(name))
        .filter(|path| path.is_dir())
        .collect();

    if files.is_empty() && dirs.is_empty() {
        println!("Nothing to clean.");
        return Ok(());
    }

    println!("The following will be deleted:");
    for path in &files {
        println!("  - {}", path.display());
    }
    for path in &dirs {
        println!("  - {} (directory)", path.display());
    }
    println!();

    if !args.yes && !confirm_clean()? {
        println!("Clean cancelled. No changes were made.");
        return Ok(());
    }

    let mut failed = 0;
    for path in &files {
        match remove_file_if_exists(path) {
            Ok(_) => display::ok(&format!("Deleted {}", path.display())),
            Err(e) => {
                display::warn(&format!("Failed to delete {}: {e}", path.display()));
                failed += 1;
            }
        }
    }
    for path in &dirs {
        match remove_dir_if_exists(path) {
            Ok(_) => display::ok(&format!("Deleted {}", path.display())),
            Err(e) => {
                display::warn(&format!("Failed to delete {}: {e}", path.display()));
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(VoicepackError::CleanIncomplete { failed });
    }

    Ok(())
}

/// Confirm deletion with the user
fn confirm_clean() -> Result<bool> {
    Confirm::new("Proceed with deletion?")
        .with_default(false)
        .with_help_message("Press 'y' to confirm, Enter to cancel")
        .prompt()
        .map_err(|e| VoicepackError::IoError {
            message: format!("Failed to read confirmation: {e}"),
        })
}
