//! Error types and handling for Voicepack
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`python`]: Interpreter and isolated-environment errors
//! - [`config`]: Manifest and project errors
//! - [`build`]: Freezing-tool errors
//! - [`archive`]: Release-archive errors
//! - [`fs`]: File system errors

// Declare submodules
pub mod archive;
pub mod build;
pub mod config;
pub mod fs;
pub mod python;

// Re-export convenience constructors from submodules
#[allow(unused_imports)]
pub use archive::{
    invalid_pattern as invalid_glob_pattern, required_missing as required_files_missing,
    write_failed as archive_write_failed,
};
#[allow(unused_imports)]
pub use build::{entry_point_missing, freeze_failed};
#[allow(unused_imports)]
pub use config::{
    parse_failed as manifest_parse_failed, project_not_found, read_failed as manifest_read_failed,
};
#[allow(unused_imports)]
pub use fs::{io_error, write_failed as file_write_failed};
#[allow(unused_imports)]
pub use python::{
    pip_failed, python_not_found, requirements_not_found, spawn_failed as command_spawn_failed,
    venv_create_failed, venv_missing,
};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Voicepack operations
#[derive(Error, Diagnostic, Debug)]
pub enum VoicepackError {
    // Interpreter and environment errors
    #[error("Python interpreter not found (tried: {tried})")]
    #[diagnostic(
        code(voicepack::python::not_found),
        help("Install Python 3 and make sure it is available on PATH")
    )]
    PythonNotFound { tried: String },

    #[error("Failed to create isolated environment at '{path}': {reason}")]
    #[diagnostic(code(voicepack::python::venv_create_failed))]
    VenvCreateFailed { path: String, reason: String },

    #[error("Isolated environment not found at '{path}'")]
    #[diagnostic(
        code(voicepack::python::venv_missing),
        help("Run 'voicepack setup' to provision the environment first")
    )]
    VenvMissing { path: String },

    #[error("Dependency manifest not found: {path}")]
    #[diagnostic(
        code(voicepack::python::requirements_not_found),
        help("The requirements file named in voicepack.yaml must exist in the project")
    )]
    RequirementsNotFound { path: String },

    #[error("pip {operation} failed: {status}")]
    #[diagnostic(code(voicepack::python::pip_failed))]
    PipFailed { operation: String, status: String },

    #[error("Failed to run '{program}': {reason}")]
    #[diagnostic(
        code(voicepack::python::spawn_failed),
        help("Check that the tool is installed inside the environment")
    )]
    CommandSpawnFailed { program: String, reason: String },

    // Freezing-tool errors
    #[error("Application entry point not found: {path}")]
    #[diagnostic(
        code(voicepack::build::entry_point_missing),
        help("The entry point named in voicepack.yaml must exist in the project root")
    )]
    EntryPointNotFound { path: String },

    #[error("PyInstaller failed: {status}")]
    #[diagnostic(
        code(voicepack::build::freeze_failed),
        help("Inspect the PyInstaller output above for the failing step")
    )]
    FreezeFailed { status: String },

    // Manifest and project errors
    #[error("Project directory not found: {path}")]
    #[diagnostic(code(voicepack::config::project_not_found))]
    ProjectNotFound { path: String },

    #[error("Failed to read manifest: {path}")]
    #[diagnostic(code(voicepack::config::read_failed))]
    ManifestReadFailed { path: String, reason: String },

    #[error("Failed to parse manifest: {path}: {reason}")]
    #[diagnostic(
        code(voicepack::config::parse_failed),
        help("voicepack.yaml must be valid YAML; every section is optional")
    )]
    ManifestParseFailed { path: String, reason: String },

    // Release-archive errors
    #[error("Required source files missing: {missing}")]
    #[diagnostic(
        code(voicepack::archive::required_missing),
        help("The release archive requires the complete application source tree")
    )]
    RequiredFilesMissing { missing: String },

    #[error("Failed to write archive: {path}: {reason}")]
    #[diagnostic(code(voicepack::archive::write_failed))]
    ArchiveWriteFailed { path: String, reason: String },

    #[error("Invalid exclude pattern '{pattern}': {reason}")]
    #[diagnostic(code(voicepack::archive::invalid_pattern))]
    InvalidGlobPattern { pattern: String, reason: String },

    // Cleaner errors
    #[error("Clean finished with {failed} item(s) not removed")]
    #[diagnostic(code(voicepack::clean::incomplete))]
    CleanIncomplete { failed: usize },

    // File system errors
    #[error("Failed to write file: {path}")]
    #[diagnostic(code(voicepack::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(voicepack::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for VoicepackError {
    fn from(err: std::io::Error) -> Self {
        VoicepackError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for VoicepackError {
    fn from(err: serde_yaml::Error) -> Self {
        VoicepackError::ManifestParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for VoicepackError {
    fn from(err: serde_json::Error) -> Self {
        VoicepackError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for VoicepackError {
    fn from(err: inquire::InquireError) -> Self {
        VoicepackError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, VoicepackError>;
