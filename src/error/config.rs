//! Manifest and project errors

use super::VoicepackError;

/// Creates a project not found error
pub fn project_not_found(path: impl Into<String>) -> VoicepackError {
    VoicepackError::ProjectNotFound { path: path.into() }
}

/// Creates a manifest read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> VoicepackError {
    VoicepackError::ManifestReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a manifest parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> VoicepackError {
    VoicepackError::ManifestParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
