//! Native library staging
//!
//! Copies whichever expected libraries are present into the staging
//! directory and records the result in a small JSON report next to them.
//! Fewer than the minimal count degrades to the manual-instructions branch
//! rather than failing outright.

use std::fs;
use std::path::Path;

use serde::Serialize;

use super::{LibrarySet, MINIMAL_REQUIRED};
use crate::error::{Result, fs as fs_error};

/// Filename of the staging report written alongside the libraries
pub const STAGING_REPORT_FILE: &str = "staging.json";

/// Result of a staging pass over the expected library set
#[derive(Debug, Clone, PartialEq)]
pub enum StagingOutcome {
    /// Enough libraries were found for the packager to bundle
    Ready { staged: Vec<String> },
    /// Too few libraries; the operator has to fetch the rest by hand
    Fallback {
        staged: Vec<String>,
        missing: Vec<String>,
    },
}

impl StagingOutcome {
    pub fn staged(&self) -> &[String] {
        match self {
            StagingOutcome::Ready { staged } | StagingOutcome::Fallback { staged, .. } => staged,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, StagingOutcome::Ready { .. })
    }
}

/// Copy expected libraries from `lib_dir` into `staging_dir`
///
/// `lib_dir` of `None` means the package's library directory was not found;
/// every expected library is then reported missing.
pub fn stage_libraries(
    lib_dir: Option<&Path>,
    staging_dir: &Path,
    set: LibrarySet,
) -> Result<StagingOutcome> {
    fs::create_dir_all(staging_dir).map_err(|e| {
        fs_error::write_failed(staging_dir.display().to_string(), e.to_string())
    })?;

    let mut staged = Vec::new();
    let mut missing = Vec::new();

    for name in set.filenames() {
        let source = lib_dir.map(|dir| dir.join(name));
        match source {
            Some(source) if source.exists() => {
                let target = staging_dir.join(name);
                fs::copy(&source, &target).map_err(|e| {
                    fs_error::write_failed(target.display().to_string(), e.to_string())
                })?;
                staged.push((*name).to_string());
            }
            _ => missing.push((*name).to_string()),
        }
    }

    if staged.len() < MINIMAL_REQUIRED {
        Ok(StagingOutcome::Fallback { staged, missing })
    } else {
        Ok(StagingOutcome::Ready { staged })
    }
}

#[derive(Serialize)]
struct StagingReport<'a> {
    set: &'a str,
    expected: usize,
    staged: &'a [String],
    ready: bool,
}

/// Write the staging report into the staging directory
pub fn write_staging_report(
    staging_dir: &Path,
    outcome: &StagingOutcome,
    set: LibrarySet,
) -> Result<()> {
    let report = StagingReport {
        set: set.label(),
        expected: set.filenames().len(),
        staged: outcome.staged(),
        ready: outcome.is_ready(),
    };

    let path = staging_dir.join(STAGING_REPORT_FILE);
    let content = serde_json::to_string_pretty(&report)?;
    fs::write(&path, content)
        .map_err(|e| fs_error::write_failed(path.display().to_string(), e.to_string()))?;

    Ok(())
}

/// Manual download instructions shown when automated staging falls short
pub const MANUAL_GUIDE: &str = "\
Automatic staging found fewer libraries than the packager needs.

OPTION 1: Download a pre-built CUDA DLL package
  https://github.com/Purfview/whisper-standalone-win/releases
  Extract and copy the missing DLLs into the staging directory.

OPTION 2: Extract from the NVIDIA CUDA 12.1 Toolkit installer
  https://developer.nvidia.com/cuda-12-1-0-download-archive
  Install only 'Developer > Libraries', then copy the DLLs from
  C:\\Program Files\\NVIDIA GPU Computing Toolkit\\CUDA\\v12.1\\bin\\
  into the staging directory.";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpu::LibrarySet;
    use tempfile::TempDir;

    fn lib_dir_with(temp: &TempDir, names: &[&str]) -> std::path::PathBuf {
        let dir = temp.path().join("torch").join("lib");
        fs::create_dir_all(&dir).unwrap();
        for name in names {
            fs::write(dir.join(name), b"dll").unwrap();
        }
        dir
    }

    #[test]
    fn test_all_minimal_libraries_stage_ready() {
        let temp = TempDir::new().unwrap();
        let lib = lib_dir_with(
            &temp,
            &["cublas64_12.dll", "cublasLt64_12.dll", "cudart64_12.dll"],
        );
        let staging = temp.path().join("cuda_dlls");

        let outcome = stage_libraries(Some(&lib), &staging, LibrarySet::Minimal).unwrap();
        assert!(outcome.is_ready());
        assert_eq!(outcome.staged().len(), 3);
        assert!(staging.join("cudart64_12.dll").exists());
    }

    #[test]
    fn test_two_libraries_fall_back() {
        let temp = TempDir::new().unwrap();
        let lib = lib_dir_with(&temp, &["cublas64_12.dll", "cudart64_12.dll"]);
        let staging = temp.path().join("cuda_dlls");

        let outcome = stage_libraries(Some(&lib), &staging, LibrarySet::Minimal).unwrap();
        match outcome {
            StagingOutcome::Fallback { staged, missing } => {
                assert_eq!(staged.len(), 2);
                assert_eq!(missing, vec!["cublasLt64_12.dll".to_string()]);
            }
            StagingOutcome::Ready { .. } => panic!("expected fallback below the threshold"),
        }
    }

    #[test]
    fn test_missing_lib_dir_falls_back_with_everything_missing() {
        let temp = TempDir::new().unwrap();
        let staging = temp.path().join("cuda_dlls");

        let outcome = stage_libraries(None, &staging, LibrarySet::Extended).unwrap();
        match outcome {
            StagingOutcome::Fallback { staged, missing } => {
                assert!(staged.is_empty());
                assert_eq!(missing.len(), 5);
            }
            StagingOutcome::Ready { .. } => panic!("expected fallback with no library source"),
        }
        // Staging directory is still created for manual copies
        assert!(staging.is_dir());
    }

    #[test]
    fn test_extended_set_with_three_staged_is_ready() {
        // Threshold stays at the minimal count even for the extended set
        let temp = TempDir::new().unwrap();
        let lib = lib_dir_with(
            &temp,
            &["cublas64_12.dll", "cublasLt64_12.dll", "cudart64_12.dll"],
        );
        let staging = temp.path().join("cuda_dlls");

        let outcome = stage_libraries(Some(&lib), &staging, LibrarySet::Extended).unwrap();
        assert!(outcome.is_ready());
        assert_eq!(outcome.staged().len(), 3);
    }

    #[test]
    fn test_staging_report_round_trip() {
        let temp = TempDir::new().unwrap();
        let staging = temp.path().join("cuda_dlls");
        fs::create_dir_all(&staging).unwrap();

        let outcome = StagingOutcome::Ready {
            staged: vec!["cublas64_12.dll".to_string()],
        };
        write_staging_report(&staging, &outcome, LibrarySet::Minimal).unwrap();

        let content = fs::read_to_string(staging.join(STAGING_REPORT_FILE)).unwrap();
        let report: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(report["set"], "minimal");
        assert_eq!(report["expected"], 3);
        assert_eq!(report["ready"], true);
    }
}
