//! Setup command implementation
//!
//! Provisions the isolated Python environment:
//! 1. Verify the dependency manifest exists
//! 2. Find a bootstrap interpreter on the search path
//! 3. Create the venv only if it does not already exist
//! 4. Upgrade pip and install the declared dependencies
//!
//! Install failures surface the raw pip exit status; nothing is retried.

use std::path::PathBuf;

use crate::cli::SetupArgs;
use crate::commands::helpers;
use crate::config;
use crate::error::{Result, python as python_error};
use crate::python::{Venv, find_python};
use crate::ui::display;

/// Run setup command
pub fn run(project: Option<PathBuf>, args: SetupArgs) -> Result<()> {
    let project_root = helpers::resolve_project_root(project)?;
    let manifest = config::load_manifest(&project_root)?;

    let requirements = project_root.join(&manifest.python.requirements);
    if !requirements.is_file() {
        return Err(python_error::requirements_not_found(
            requirements.display().to_string(),
        ));
    }

    let bootstrap = find_python()?;
    let venv = Venv::new(&project_root, &manifest.python.venv_dir);

    if args.dry_run {
        display::step("Dry run: environment provisioning plan");
        display::detail(&format!("interpreter: {}", bootstrap.display()));
        if venv.exists() {
            display::detail(&format!(
                "environment: {} (already present, would keep)",
                venv.root().display()
            ));
        } else {
            display::detail(&format!("environment: {} (would create)", venv.root().display()));
        }
        display::detail(&format!("install: -r {}", requirements.display()));
        return Ok(());
    }

    display::step("Provisioning isolated environment");

    if venv.ensure(&bootstrap)? {
        display::ok(&format!("Environment created at {}", venv.root().display()));
    } else {
        display::ok(&format!(
            "Environment already present at {}, skipping creation",
            venv.root().display()
        ));
    }

    display::step("Installing dependencies");
    venv.upgrade_pip()?;
    venv.install_requirements(&requirements)?;
    display::ok(&format!("Dependencies installed from {}", manifest.python.requirements));

    if args.check {
        run_import_checks(&venv, &manifest.build.hidden_imports)?;
    }

    Ok(())
}

/// Probe that the modules the packager depends on import cleanly
fn run_import_checks(venv: &Venv, modules: &[String]) -> Result<()> {
    display::step("Checking imports");

    let mut missing = 0;
    for module in modules {
        if venv.check_import(module)? {
            display::ok(&format!("import {module}"));
        } else {
            display::warn(&format!("import {module} failed"));
            missing += 1;
        }
    }

    if missing > 0 {
        display::warn(&format!(
            "{missing} module(s) failed to import; 'voicepack build' will likely fail"
        ));
    }

    Ok(())
}
