//! Project manifest management
//!
//! All per-project knobs live in a single declarative manifest,
//! `voicepack.yaml`, at the project root. Every field has a default matching
//! the Voice Tools layout, so a missing manifest is a valid (default) one.

use std::fs;
use std::path::Path;

use crate::error::{Result, VoicepackError};

pub mod manifest;

pub use manifest::{
    AppSection, ArchiveSection, BuildSection, CleanSection, GpuSection, Manifest, PythonSection,
};

/// Manifest filename
pub const MANIFEST_FILE: &str = "voicepack.yaml";

/// Load the manifest from a project root
///
/// Returns the default manifest if voicepack.yaml does not exist, as the
/// manifest file is optional.
pub fn load_manifest(project_root: &Path) -> Result<Manifest> {
    let path = project_root.join(MANIFEST_FILE);

    if !path.exists() {
        return Ok(Manifest::default());
    }

    let content = fs::read_to_string(&path).map_err(|e| VoicepackError::ManifestReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    Manifest::from_yaml(&content, &path.display().to_string())
}
