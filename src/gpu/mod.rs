//! GPU acceleration support
//!
//! After the GPU-enabled inference package is installed, the required CUDA
//! runtime libraries are copied out of its `lib` directory into a local
//! staging directory so the packager can bundle them. Success is a count
//! threshold over expected filenames, not checksum or version validation.

use std::path::PathBuf;

use crate::python::Venv;

pub mod staging;

pub use staging::{StagingOutcome, stage_libraries, write_staging_report};

/// CUDA 12 / cuDNN 9 runtime libraries, in staging priority order.
/// The first three are the minimal set; all five form the extended set.
const NATIVE_LIBRARIES: &[&str] = &[
    "cublas64_12.dll",
    "cublasLt64_12.dll",
    "cudart64_12.dll",
    "cudnn64_9.dll",
    "cudnn_ops64_9.dll",
];

/// Libraries below this count mean GPU staging did not succeed
pub const MINIMAL_REQUIRED: usize = 3;

/// Which set of native libraries to stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibrarySet {
    /// Runtime/BLAS libraries only
    Minimal,
    /// Minimal plus the cuDNN libraries
    Extended,
}

impl LibrarySet {
    pub fn filenames(self) -> &'static [&'static str] {
        match self {
            LibrarySet::Minimal => &NATIVE_LIBRARIES[..MINIMAL_REQUIRED],
            LibrarySet::Extended => NATIVE_LIBRARIES,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LibrarySet::Minimal => "minimal",
            LibrarySet::Extended => "extended",
        }
    }
}

/// Locate the native library directory of the installed inference package
pub fn package_lib_dir(venv: &Venv, package: &str) -> Option<PathBuf> {
    let lib = venv.site_packages()?.join(package).join("lib");
    lib.is_dir().then_some(lib)
}
