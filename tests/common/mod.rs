//! Common test utilities for npm-workspace integration tests

use assert_cmd::Command;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch directory the generator creates projects in
pub struct TestDir {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the parent directory of generated projects
    pub path: PathBuf,
}

impl TestDir {
    /// Create a new test directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Read a file below the test directory
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Write a file below the test directory
    #[allow(dead_code)]
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Check if a file exists below the test directory
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Parse a generated package.json
    #[allow(dead_code)]
    pub fn manifest(&self, path: &str) -> Manifest {
        serde_json::from_str(&self.read_file(path)).expect("Failed to parse manifest")
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

/// The parts of a package.json the tests look at
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct Manifest {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub private: bool,
    pub author: Option<String>,
    #[serde(default)]
    pub workspaces: Vec<String>,
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
    #[serde(default)]
    pub scripts: BTreeMap<String, String>,
}

/// Command for the real binary, isolated from developer environment overrides
#[allow(deprecated)]
pub fn npm_workspace_cmd() -> Command {
    let mut cmd = Command::cargo_bin("npm-workspace").expect("binary should be built");
    cmd.env_remove("NPM_WORKSPACE_AUTHOR");
    cmd.env_remove("NPM_WORKSPACE_NPM");
    cmd.env_remove("RUST_LOG");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Command that creates a project below `dir` without any prompts
#[allow(dead_code)]
pub fn create_cmd(dir: &Path, project: &str, author: &str) -> Command {
    let mut cmd = npm_workspace_cmd();
    cmd.args(["--no-banner", "--skip-install", "-C"])
        .arg(dir)
        .args(["-p", project, "-a", author]);
    cmd
}
