//! Gpu command implementation
//!
//! Swaps the CPU-only inference dependency for the GPU-enabled build and
//! stages the CUDA runtime libraries for the packager:
//! 1. Uninstall the CPU variant
//! 2. Install the GPU variant from the alternate package index
//! 3. Probe the installed package's lib directory for expected filenames
//! 4. Copy whatever is found into the staging directory
//!
//! Staging fewer than the minimal library count is not an error: the
//! command prints manual download instructions and leaves the partial
//! staging in place for the operator to complete.

use std::path::PathBuf;

use console::Style;
use inquire::Confirm;

use crate::cli::GpuArgs;
use crate::commands::helpers;
use crate::config;
use crate::error::{Result, VoicepackError, python as python_error};
use crate::gpu::{self, LibrarySet, StagingOutcome};
use crate::python::Venv;
use crate::ui::display;

/// Run gpu command
pub fn run(project: Option<PathBuf>, args: GpuArgs) -> Result<()> {
    let project_root = helpers::resolve_project_root(project)?;
    let manifest = config::load_manifest(&project_root)?;

    let venv = Venv::new(&project_root, &manifest.python.venv_dir);
    if !venv.exists() {
        return Err(python_error::venv_missing(venv.root().display().to_string()));
    }

    let set = if args.extended {
        LibrarySet::Extended
    } else {
        LibrarySet::Minimal
    };
    let staging_dir = project_root.join(&manifest.gpu.staging_dir);

    if args.dry_run {
        display::step("Dry run: GPU acceleration plan");
        display::detail(&format!("uninstall: {}", manifest.gpu.package));
        display::detail(&format!(
            "install: {} --index-url {}",
            manifest.gpu.package, manifest.gpu.index_url
        ));
        display::detail(&format!(
            "stage {} library set ({} files) into {}",
            set.label(),
            set.filenames().len(),
            staging_dir.display()
        ));
        return Ok(());
    }

    if !args.yes && !confirm_replace(&manifest.gpu.package)? {
        println!("GPU install cancelled. No changes were made.");
        return Ok(());
    }

    display::step(&format!(
        "Replacing CPU {} with the GPU build",
        manifest.gpu.package
    ));
    venv.uninstall(&manifest.gpu.package)?;
    venv.install_from_index(&manifest.gpu.package, &manifest.gpu.index_url)?;
    display::ok(&format!(
        "{} installed from {}",
        manifest.gpu.package, manifest.gpu.index_url
    ));

    display::step(&format!(
        "Staging {} native libraries into {}",
        set.label(),
        manifest.gpu.staging_dir
    ));
    let lib_dir = gpu::package_lib_dir(&venv, &manifest.gpu.package);
    if lib_dir.is_none() {
        display::warn(&format!(
            "No lib directory found under the installed {} package",
            manifest.gpu.package
        ));
    }

    let outcome = gpu::stage_libraries(lib_dir.as_deref(), &staging_dir, set)?;
    gpu::write_staging_report(&staging_dir, &outcome, set)?;

    match &outcome {
        StagingOutcome::Ready { staged } => {
            for name in staged {
                display::ok(&format!("Staged {name}"));
            }
            display::summary(
                "GPU staging complete:",
                &format!("{} of {} libraries", staged.len(), set.filenames().len()),
            );
        }
        StagingOutcome::Fallback { staged, missing } => {
            for name in staged {
                display::ok(&format!("Staged {name}"));
            }
            for name in missing {
                display::warn(&format!("Missing {name}"));
            }
            println!();
            println!(
                "{}",
                Style::new().yellow().bold().apply_to("Manual steps required")
            );
            println!("{}", gpu::staging::MANUAL_GUIDE);
            display::detail(&format!("staging directory: {}", staging_dir.display()));
        }
    }

    Ok(())
}

/// Confirm the package swap with the user
fn confirm_replace(package: &str) -> Result<bool> {
    Confirm::new(&format!(
        "Uninstall CPU {package} and install the GPU build?"
    ))
    .with_default(true)
    .with_help_message("Press Enter to confirm, or 'n' to cancel")
    .prompt()
    .map_err(|e| VoicepackError::IoError {
        message: format!("Failed to read confirmation: {e}"),
    })
}
