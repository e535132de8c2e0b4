//! Build command implementation
//!
//! Freezes the application into a distributable bundle:
//! 1. Verify the entry point and the provisioned environment
//! 2. Remove prior build output unconditionally
//! 3. Invoke PyInstaller with the manifest's inclusion directives,
//!    bundling any staged native libraries
//! 4. Zip the one-directory bundle into a versioned archive
//!
//! A non-zero PyInstaller exit reports failure and halts; partial build
//! output is left in place for inspection.

use std::path::PathBuf;

use crate::archive::zip_directory;
use crate::cli::BuildArgs;
use crate::commands::helpers;
use crate::common::format::human_size;
use crate::common::fs::dir_size;
use crate::config;
use crate::error::{Result, build as build_error, python as python_error};
use crate::freeze::{self, FreezePlan};
use crate::python::Venv;
use crate::ui::display;

/// Run build command
pub fn run(project: Option<PathBuf>, verbose: bool, args: BuildArgs) -> Result<()> {
    let project_root = helpers::resolve_project_root(project)?;
    let manifest = config::load_manifest(&project_root)?;

    let entry_point = project_root.join(&manifest.app.entry_point);
    if !entry_point.is_file() {
        return Err(build_error::entry_point_missing(
            entry_point.display().to_string(),
        ));
    }

    let venv = Venv::new(&project_root, &manifest.python.venv_dir);
    if !venv.exists() {
        return Err(python_error::venv_missing(venv.root().display().to_string()));
    }

    let onefile = args.onefile || manifest.build.onefile;
    let staged_libraries = staged_libraries(&project_root, &manifest.gpu.staging_dir);
    let plan = FreezePlan::new(&venv.python_path(), &manifest, &staged_libraries, onefile);

    if args.dry_run {
        display::step("Dry run: packaging plan");
        display::detail(&format!("would remove {}/ and {}/", freeze::BUILD_DIR, freeze::DIST_DIR));
        display::detail(&plan.command_line());
        return Ok(());
    }

    display::step("Removing prior build output");
    let removed = freeze::clean_output_dirs(&project_root)?;
    if removed.is_empty() {
        display::detail("nothing to remove");
    } else {
        for dir in &removed {
            display::ok(&format!("Removed {dir}/"));
        }
    }

    display::step(&format!(
        "Freezing {} ({} mode)",
        manifest.app.name,
        if onefile { "single-file" } else { "one-directory" }
    ));
    if staged_libraries.is_empty() {
        display::detail("no staged native libraries, building without GPU bundling");
    } else {
        display::detail(&format!(
            "bundling {} staged native libraries",
            staged_libraries.len()
        ));
    }
    if verbose {
        display::detail(&plan.command_line());
    }

    plan.run(&project_root)?;

    let bundle = freeze::bundle_path(&project_root, &manifest.app.name, onefile);
    display::ok(&format!("Bundle written to {}", bundle.display()));

    if onefile {
        let size = std::fs::metadata(&bundle).map(|m| m.len()).unwrap_or(0);
        display::summary("Executable size:", &human_size(size));
        return Ok(());
    }

    let archive_name = format!("{}-v{}.zip", manifest.app.name, manifest.app.version);
    let archive_path = project_root.join(&archive_name);
    display::step(&format!("Compressing bundle into {archive_name}"));

    let summary = zip_directory(&bundle, &archive_path)?;
    display::ok(&format!("{} entries written", summary.entries));
    display::summary("Release bundle:", &archive_path.display().to_string());
    display::summary("Archive size:", &human_size(summary.bytes));
    if verbose {
        if let Ok(size) = dir_size(&bundle) {
            display::detail(&format!("uncompressed bundle size: {}", human_size(size)));
        }
    }

    Ok(())
}

/// Native libraries previously staged by the gpu command, if any
fn staged_libraries(project_root: &std::path::Path, staging_dir: &str) -> Vec<PathBuf> {
    let staging = project_root.join(staging_dir);
    let Ok(entries) = std::fs::read_dir(&staging) else {
        return Vec::new();
    };

    let mut libraries: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("dll"))
        })
        .collect();
    libraries.sort();
    libraries
}
