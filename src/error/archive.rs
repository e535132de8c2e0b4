//! Release-archive errors

use super::VoicepackError;

/// Creates a required files missing error from the missing paths
pub fn required_missing<I, S>(missing: I) -> VoicepackError
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let missing: Vec<String> = missing.into_iter().map(Into::into).collect();
    VoicepackError::RequiredFilesMissing {
        missing: missing.join(", "),
    }
}

/// Creates an archive write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> VoicepackError {
    VoicepackError::ArchiveWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid glob pattern error
pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> VoicepackError {
    VoicepackError::InvalidGlobPattern {
        pattern: pattern.into(),
        reason: reason.into(),
    }
}
