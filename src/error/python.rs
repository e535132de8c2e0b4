//! Interpreter and isolated-environment errors

use super::VoicepackError;

/// Creates a python not found error
pub fn not_found(tried: impl Into<String>) -> VoicepackError {
    VoicepackError::PythonNotFound {
        tried: tried.into(),
    }
}

pub use self::not_found as python_not_found;

/// Creates a venv create failed error
pub fn venv_create_failed(path: impl Into<String>, reason: impl Into<String>) -> VoicepackError {
    VoicepackError::VenvCreateFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a venv missing error
pub fn venv_missing(path: impl Into<String>) -> VoicepackError {
    VoicepackError::VenvMissing { path: path.into() }
}

/// Creates a requirements not found error
pub fn requirements_not_found(path: impl Into<String>) -> VoicepackError {
    VoicepackError::RequirementsNotFound { path: path.into() }
}

/// Creates a pip failed error with the raw exit status
pub fn pip_failed(operation: impl Into<String>, status: impl Into<String>) -> VoicepackError {
    VoicepackError::PipFailed {
        operation: operation.into(),
        status: status.into(),
    }
}

/// Creates a spawn failed error
pub fn spawn_failed(program: impl Into<String>, reason: impl Into<String>) -> VoicepackError {
    VoicepackError::CommandSpawnFailed {
        program: program.into(),
        reason: reason.into(),
    }
}
