//! File system errors

use super::VoicepackError;

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> VoicepackError {
    VoicepackError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> VoicepackError {
    VoicepackError::IoError {
        message: message.into(),
    }
}
