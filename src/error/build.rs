//! Freezing-tool errors

use super::VoicepackError;

/// Creates an entry point missing error
pub fn entry_point_missing(path: impl Into<String>) -> VoicepackError {
    VoicepackError::EntryPointNotFound { path: path.into() }
}

/// Creates a freeze failed error with the raw exit status
pub fn freeze_failed(status: impl Into<String>) -> VoicepackError {
    VoicepackError::FreezeFailed {
        status: status.into(),
    }
}
