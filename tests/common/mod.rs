//! Common test utilities for Kiln integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Descriptor of the original project: one implementation library and four
/// native runtime archives, no repositories
#[allow(dead_code)]
pub const HEATHENSOFT_DESCRIPTOR: &str = r"group: io.github.heathensoft
version: 1.0-SNAPSHOT
repositories: []
dependencies:
  - path: libs/heathensoft-jlib-0.5.0.jar
    scope: implementation
  - path: libs/natives/lwjgl-natives-windows.jar
    scope: runtimeOnly
  - path: libs/natives/lwjgl-glfw-natives-windows.jar
    scope: runtimeOnly
  - path: libs/natives/lwjgl-opengl-natives-windows.jar
    scope: runtimeOnly
  - path: libs/natives/lwjgl-stb-natives-windows.jar
    scope: runtimeOnly
";

/// Archives referenced by [`HEATHENSOFT_DESCRIPTOR`], in declaration order
#[allow(dead_code)]
pub const HEATHENSOFT_ARCHIVES: [&str; 5] = [
    "libs/heathensoft-jlib-0.5.0.jar",
    "libs/natives/lwjgl-natives-windows.jar",
    "libs/natives/lwjgl-glfw-natives-windows.jar",
    "libs/natives/lwjgl-opengl-natives-windows.jar",
    "libs/natives/lwjgl-stb-natives-windows.jar",
];

/// A test project for integration tests
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Canonical path to project root
    pub path: PathBuf,
}

impl TestProject {
    /// Create a new empty test project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = dunce::canonicalize(temp.path()).expect("Failed to canonicalize temp dir");
        Self { temp, path }
    }

    /// Project with the original descriptor and all of its archives present
    #[allow(dead_code)]
    pub fn heathensoft() -> Self {
        let project = Self::new();
        project.write_descriptor(HEATHENSOFT_DESCRIPTOR);
        for archive in HEATHENSOFT_ARCHIVES {
            project.create_archive(archive);
        }
        project
    }

    /// Write kiln.yaml
    pub fn write_descriptor(&self, content: &str) {
        self.write_file("kiln.yaml", content);
    }

    /// Create a small archive file; returns its absolute path
    pub fn create_archive(&self, path: &str) -> PathBuf {
        self.write_file(path, &format!("PK\u{3}\u{4}{path}"));
        self.path.join(path)
    }

    /// Write a file in project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from project
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in project
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// The kiln binary, run from `dir` with no inherited descriptor override
#[allow(deprecated)]
pub fn kiln_cmd_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("kiln").expect("kiln binary not built");
    cmd.current_dir(dir)
        .env_remove("KILN_DESCRIPTOR")
        .env_remove("RUST_LOG");
    cmd
}

/// Split a printed classpath into its entries
#[allow(dead_code)]
pub fn split_classpath(output: &str) -> Vec<PathBuf> {
    std::env::split_paths(output.trim_end()).collect()
}
