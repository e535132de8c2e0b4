//! Manifest type definitions and serialization
//!
//! The manifest replaces the ad hoc file-existence checks of the old batch
//! pipeline with one declarative document: which files a release requires,
//! which directories are excluded, which native libraries GPU staging
//! expects, and how the executable bundle is assembled.

use serde::{Deserialize, Serialize};

use crate::error::{Result, VoicepackError};

/// Project manifest (voicepack.yaml)
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Manifest {
    pub app: AppSection,
    pub python: PythonSection,
    pub gpu: GpuSection,
    pub build: BuildSection,
    pub archive: ArchiveSection,
    pub clean: CleanSection,
}

impl Manifest {
    /// Parse a manifest from YAML content
    pub fn from_yaml(content: &str, path: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| VoicepackError::ManifestParseFailed {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Product identity used for bundle and archive naming
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AppSection {
    pub name: String,
    pub version: String,
    pub entry_point: String,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            name: "VoiceTools".to_string(),
            version: "3.0.0".to_string(),
            entry_point: "voice_app.py".to_string(),
        }
    }
}

/// Interpreter and isolated-environment settings
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PythonSection {
    pub requirements: String,
    pub venv_dir: String,
}

impl Default for PythonSection {
    fn default() -> Self {
        Self {
            requirements: "requirements.txt".to_string(),
            venv_dir: "venv".to_string(),
        }
    }
}

/// GPU acceleration install settings
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct GpuSection {
    /// Inference dependency whose CPU variant is swapped out
    pub package: String,
    /// Alternate package index serving the GPU-enabled wheels
    pub index_url: String,
    /// Staging directory for native shared libraries
    pub staging_dir: String,
}

impl Default for GpuSection {
    fn default() -> Self {
        Self {
            package: "torch".to_string(),
            index_url: "https://download.pytorch.org/whl/cu121".to_string(),
            staging_dir: "cuda_dlls".to_string(),
        }
    }
}

/// Executable packaging settings
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct BuildSection {
    /// Modules PyInstaller cannot discover on its own
    pub hidden_imports: Vec<String>,
    /// Dependencies that need full-package collection
    pub collect_all: Vec<String>,
    /// Produce a single-file executable instead of a one-directory bundle
    pub onefile: bool,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            hidden_imports: vec!["customtkinter".to_string(), "faster_whisper".to_string()],
            collect_all: vec!["customtkinter".to_string(), "faster_whisper".to_string()],
            onefile: false,
        }
    }
}

/// Release archive rule set
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ArchiveSection {
    /// Top-level directories copied recursively
    pub include_dirs: Vec<String>,
    /// Extensions of top-level files to include (no leading dot)
    pub include_extensions: Vec<String>,
    /// Directory names excluded wherever they appear
    pub exclude_dirs: Vec<String>,
    /// Additional glob patterns excluded from the archive
    pub exclude_patterns: Vec<String>,
    /// Files that must exist before an archive is produced
    pub required_files: Vec<String>,
}

impl Default for ArchiveSection {
    fn default() -> Self {
        Self {
            include_dirs: vec!["core".to_string()],
            include_extensions: vec![
                "py".to_string(),
                "txt".to_string(),
                "md".to_string(),
                "bat".to_string(),
            ],
            exclude_dirs: vec![
                "venv".to_string(),
                "__pycache__".to_string(),
                "build".to_string(),
                "dist".to_string(),
                "cuda_dlls".to_string(),
                "models".to_string(),
                ".git".to_string(),
            ],
            exclude_patterns: vec![],
            required_files: vec![
                "voice_app.py".to_string(),
                "config.py".to_string(),
                "requirements.txt".to_string(),
                "core/processor.py".to_string(),
                "core/transcriber.py".to_string(),
                "core/aligner.py".to_string(),
            ],
        }
    }
}

/// Workspace cleaner targets
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CleanSection {
    /// Superseded helper scripts safe to delete
    pub deprecated_files: Vec<String>,
    /// Transient build directories removed wholesale
    pub transient_dirs: Vec<String>,
}

impl Default for CleanSection {
    fn default() -> Self {
        Self {
            deprecated_files: vec![
                "download_cuda_dlls.py".to_string(),
                "find_cuda_dlls.py".to_string(),
                "test_imports.py".to_string(),
            ],
            transient_dirs: vec!["build".to_string(), "dist".to_string()],
        }
    }
}
