//! Common test utilities for Voicepack integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A sandboxed project tree for integration tests
#[allow(dead_code)]
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new empty test project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the project, creating parent directories
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Create a directory in the project
    pub fn create_dir(&self, path: &str) -> PathBuf {
        let dir_path = self.path.join(path);
        std::fs::create_dir_all(&dir_path).expect("Failed to create directory");
        dir_path
    }

    /// Check if a path exists in the project
    pub fn exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Lay down the minimal Voice Tools source tree the archiver requires
    pub fn seed_sources(&self) {
        self.write_file("voice_app.py", "import customtkinter\n");
        self.write_file("config.py", "FRAME_RATE = 30\n");
        self.write_file("requirements.txt", "customtkinter>=5.2\nfaster-whisper>=1.0\n");
        self.write_file("core/processor.py", "def process():\n    pass\n");
        self.write_file("core/transcriber.py", "def transcribe():\n    pass\n");
        self.write_file("core/aligner.py", "def align():\n    pass\n");
    }

    /// Fake a provisioned environment so venv preconditions pass
    pub fn seed_venv(&self) {
        let python = if cfg!(windows) {
            self.path.join("venv").join("Scripts").join("python.exe")
        } else {
            self.path.join("venv").join("bin").join("python3")
        };
        std::fs::create_dir_all(python.parent().expect("venv bin dir"))
            .expect("Failed to create venv directory");
        std::fs::write(&python, "").expect("Failed to write venv marker");
    }
}
