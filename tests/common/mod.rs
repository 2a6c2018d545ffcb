//! Common test infrastructure for incfix integration tests.
//!
//! Provides:
//! - TestProject: temp directory of source fixtures, with the binary run
//!   from inside it
//! - Output assertion helpers

use std::path::PathBuf;
use std::process::{Command, Output};

/// A throwaway directory the binary is run against. Each test gets its own,
/// cleaned up on drop.
pub struct TestProject {
    pub dir: tempfile::TempDir,
}

impl TestProject {
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Run incfix with the project directory as its working directory.
    pub fn run_incfix(&self) -> Output {
        Command::new(env!("CARGO_BIN_EXE_incfix"))
            .current_dir(self.dir.path())
            // Isolate environment
            .env_clear()
            .env("PATH", std::env::var("PATH").unwrap_or_default())
            .output()
            .expect("Failed to execute incfix")
    }

    /// Run incfix and assert success
    pub fn run_incfix_ok(&self) -> Output {
        let output = self.run_incfix();
        assert!(
            output.status.success(),
            "incfix failed (exit {:?}):\nstdout: {}\nstderr: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        output
    }

    /// Get path to a file in the project
    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Write a file into the project
    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(&path, content)
            .unwrap_or_else(|_| panic!("Failed to write {}", relative));
    }

    /// Read a file from the project
    pub fn read_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|_| panic!("Failed to read {}", relative))
    }

    /// Check if a file exists in the project
    #[allow(dead_code)]
    pub fn file_exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }
}

/// Captured stderr as a string
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Captured stdout as a string
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}
