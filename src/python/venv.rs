//! Isolated environment management
//!
//! A `Venv` wraps the project-local environment directory. Creation is
//! idempotent: an environment whose interpreter already exists is never
//! recreated. pip runs through the venv interpreter (`python -m pip ...`)
//! so the system installation is never touched.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Result, python};

/// A project-local isolated Python environment
#[derive(Debug, Clone)]
pub struct Venv {
    root: PathBuf,
}

impl Venv {
    pub fn new(project_root: &Path, venv_dir: &str) -> Self {
        Self {
            root: project_root.join(venv_dir),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to the interpreter inside this environment
    pub fn python_path(&self) -> PathBuf {
        if cfg!(windows) {
            self.root.join("Scripts").join("python.exe")
        } else {
            let bin = self.root.join("bin");
            let python3 = bin.join("python3");
            if python3.exists() {
                python3
            } else {
                bin.join("python")
            }
        }
    }

    /// Whether the environment has already been provisioned
    pub fn exists(&self) -> bool {
        self.python_path().exists()
    }

    /// Locate the site-packages directory of this environment
    ///
    /// On Windows this is a fixed layout; elsewhere the versioned
    /// `lib/pythonX.Y` directory has to be probed.
    pub fn site_packages(&self) -> Option<PathBuf> {
        if cfg!(windows) {
            let path = self.root.join("Lib").join("site-packages");
            return path.is_dir().then_some(path);
        }

        let lib = self.root.join("lib");
        let entries = std::fs::read_dir(&lib).ok()?;
        for entry in entries.flatten() {
            let name = entry.file_name();
            if name.to_string_lossy().starts_with("python") {
                let candidate = entry.path().join("site-packages");
                if candidate.is_dir() {
                    return Some(candidate);
                }
            }
        }
        None
    }

    /// Create the environment with the given bootstrap interpreter
    ///
    /// Callers are expected to check `exists()` first; this always invokes
    /// `python -m venv`.
    pub fn create(&self, bootstrap: &Path) -> Result<()> {
        let status = Command::new(bootstrap)
            .arg("-m")
            .arg("venv")
            .arg(&self.root)
            .status()
            .map_err(|e| python::spawn_failed(bootstrap.display().to_string(), e.to_string()))?;

        if !status.success() {
            return Err(python::venv_create_failed(
                self.root.display().to_string(),
                format!("python -m venv exited with {status}"),
            ));
        }

        Ok(())
    }

    /// Create the environment unless its interpreter is already present
    ///
    /// Returns whether a new environment was created. An existing
    /// environment is left untouched; the bootstrap interpreter is not
    /// even invoked.
    pub fn ensure(&self, bootstrap: &Path) -> Result<bool> {
        if self.exists() {
            return Ok(false);
        }
        self.create(bootstrap)?;
        Ok(true)
    }

    /// Upgrade pip inside the environment
    pub fn upgrade_pip(&self) -> Result<()> {
        self.run_pip("install --upgrade pip", |cmd| {
            cmd.args(["install", "--upgrade", "pip"]);
        })
    }

    /// Install dependencies from a requirements file
    pub fn install_requirements(&self, requirements: &Path) -> Result<()> {
        self.run_pip("install -r", |cmd| {
            cmd.args(["install", "-r"]).arg(requirements);
        })
    }

    /// Uninstall a package without prompting
    pub fn uninstall(&self, package: &str) -> Result<()> {
        self.run_pip("uninstall", |cmd| {
            cmd.args(["uninstall", "-y", package]);
        })
    }

    /// Install a package from an alternate package index
    pub fn install_from_index(&self, package: &str, index_url: &str) -> Result<()> {
        self.run_pip("install", |cmd| {
            cmd.args(["install", package, "--index-url", index_url]);
        })
    }

    /// Probe whether a module imports cleanly inside the environment
    pub fn check_import(&self, module: &str) -> Result<bool> {
        let python = self.python_path();
        let status = Command::new(&python)
            .arg("-c")
            .arg(format!("import {module}"))
            .status()
            .map_err(|e| python::spawn_failed(python.display().to_string(), e.to_string()))?;

        Ok(status.success())
    }

    fn run_pip<F>(&self, operation: &str, configure: F) -> Result<()>
    where
        F: FnOnce(&mut Command),
    {
        let python = self.python_path();
        let mut cmd = Command::new(&python);
        cmd.args(["-m", "pip"]);
        configure(&mut cmd);

        let status = cmd
            .status()
            .map_err(|e| python::spawn_failed(python.display().to_string(), e.to_string()))?;

        if !status.success() {
            return Err(python::pip_failed(operation, status.to_string()));
        }

        Ok(())
    }
}
