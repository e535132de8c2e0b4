//! Executable packaging via PyInstaller
//!
//! Builds the freezing-tool invocation from the manifest and the staged
//! native libraries, and removes prior build output so a rebuild never
//! trips over leftover state.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::Manifest;
use crate::error::{Result, build, python};

/// PyInstaller working directory
pub const BUILD_DIR: &str = "build";

/// PyInstaller output directory
pub const DIST_DIR: &str = "dist";

/// A fully assembled freezing-tool invocation
#[derive(Debug, Clone)]
pub struct FreezePlan {
    program: PathBuf,
    args: Vec<String>,
    onefile: bool,
}

impl FreezePlan {
    /// Assemble the invocation from the manifest and staged libraries
    pub fn new(
        venv_python: &Path,
        manifest: &Manifest,
        staged_libraries: &[PathBuf],
        onefile: bool,
    ) -> Self {
        let mut args = vec![
            "-m".to_string(),
            "PyInstaller".to_string(),
            "--noconfirm".to_string(),
            "--windowed".to_string(),
            "--name".to_string(),
            manifest.app.name.clone(),
        ];

        args.push(if onefile {
            "--onefile".to_string()
        } else {
            "--onedir".to_string()
        });

        for module in &manifest.build.hidden_imports {
            args.push("--hidden-import".to_string());
            args.push(module.clone());
        }

        for package in &manifest.build.collect_all {
            args.push("--collect-all".to_string());
            args.push(package.clone());
        }

        // PyInstaller's SRC<sep>DEST separator is platform-specific
        let separator = if cfg!(windows) { ';' } else { ':' };
        for library in staged_libraries {
            args.push("--add-binary".to_string());
            args.push(format!("{}{}.", library.display(), separator));
        }

        args.push(manifest.app.entry_point.clone());

        Self {
            program: venv_python.to_path_buf(),
            args,
            onefile,
        }
    }

    pub fn onefile(&self) -> bool {
        self.onefile
    }

    /// Rendered command line for display and dry runs
    pub fn command_line(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }

    /// Run the freezing tool from the project root, blocking until exit
    pub fn run(&self, project_root: &Path) -> Result<()> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(project_root)
            .status()
            .map_err(|e| {
                python::spawn_failed(self.program.display().to_string(), e.to_string())
            })?;

        if !status.success() {
            return Err(build::freeze_failed(status.to_string()));
        }

        Ok(())
    }
}

/// Remove prior build and output directories unconditionally
///
/// Returns the directories that actually existed and were removed.
pub fn clean_output_dirs(project_root: &Path) -> Result<Vec<String>> {
    let mut removed = Vec::new();
    for dir in [BUILD_DIR, DIST_DIR] {
        let path = project_root.join(dir);
        if path.is_dir() {
            std::fs::remove_dir_all(&path)?;
            removed.push(dir.to_string());
        }
    }
    Ok(removed)
}

/// Where the frozen bundle lands for the given plan
pub fn bundle_path(project_root: &Path, app_name: &str, onefile: bool) -> PathBuf {
    let dist = project_root.join(DIST_DIR);
    if onefile {
        if cfg!(windows) {
            dist.join(format!("{app_name}.exe"))
        } else {
            dist.join(app_name)
        }
    } else {
        dist.join(app_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn plan_for(manifest: &Manifest, staged: &[PathBuf], onefile: bool) -> FreezePlan {
        FreezePlan::new(Path::new("/venv/bin/python"), manifest, staged, onefile)
    }

    #[test]
    fn test_plan_includes_hidden_imports_and_collect_all() {
        let manifest = Manifest::default();
        let plan = plan_for(&manifest, &[], false);
        let line = plan.command_line();

        assert!(line.contains("-m PyInstaller"));
        assert!(line.contains("--noconfirm"));
        assert!(line.contains("--windowed"));
        assert!(line.contains("--name VoiceTools"));
        assert!(line.contains("--hidden-import customtkinter"));
        assert!(line.contains("--collect-all faster_whisper"));
        assert!(line.ends_with("voice_app.py"));
    }

    #[test]
    fn test_plan_onedir_is_default_mode() {
        let manifest = Manifest::default();
        let plan = plan_for(&manifest, &[], false);
        assert!(plan.command_line().contains("--onedir"));
        assert!(!plan.command_line().contains("--onefile"));
    }

    #[test]
    fn test_plan_onefile_mode() {
        let manifest = Manifest::default();
        let plan = plan_for(&manifest, &[], true);
        assert!(plan.command_line().contains("--onefile"));
        assert!(plan.onefile());
    }

    #[test]
    fn test_plan_bundles_staged_libraries() {
        let manifest = Manifest::default();
        let staged = vec![PathBuf::from("cuda_dlls").join("cublas64_12.dll")];
        let plan = plan_for(&manifest, &staged, false);
        let line = plan.command_line();

        assert!(line.contains("--add-binary"));
        assert!(line.contains("cublas64_12.dll"));
    }

    #[test]
    fn test_clean_output_dirs_removes_both() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join(BUILD_DIR).join("nested")).unwrap();
        std::fs::create_dir_all(temp.path().join(DIST_DIR)).unwrap();

        let removed = clean_output_dirs(temp.path()).unwrap();
        assert_eq!(removed, vec!["build", "dist"]);
        assert!(!temp.path().join(BUILD_DIR).exists());
        assert!(!temp.path().join(DIST_DIR).exists());
    }

    #[test]
    fn test_clean_output_dirs_is_rerunnable() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join(BUILD_DIR)).unwrap();

        assert_eq!(clean_output_dirs(temp.path()).unwrap(), vec!["build"]);
        // Second pass finds nothing and still succeeds
        assert!(clean_output_dirs(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_bundle_path_onedir() {
        let root = Path::new("/project");
        let path = bundle_path(root, "VoiceTools", false);
        assert_eq!(path, root.join("dist").join("VoiceTools"));
    }
}
