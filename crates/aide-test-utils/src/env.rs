//! [`TestEnv`] fixture for aide test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary home directory and an empty project directory side by side.
///
/// ```text
/// <tmp>/home/            # stands in for $HOME
/// <tmp>/home/.aide/      # storage root (created lazily by the store)
/// <tmp>/project/         # working directory for apply
/// ```
///
/// # Example
///
/// ```rust,no_run
/// use aide_test_utils::TestEnv;
///
/// let env = TestEnv::new();
/// env.write_project_file("CLAUDE.md", "# Notes\n");
/// env.assert_project_file_contains("CLAUDE.md", "Notes");
/// ```
pub struct TestEnv {
    temp_dir: TempDir,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    /// Create the home and project directories.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("home")).unwrap();
        fs::create_dir_all(temp_dir.path().join("project")).unwrap();
        Self { temp_dir }
    }

    /// The stand-in home directory.
    pub fn home(&self) -> PathBuf {
        self.temp_dir.path().join("home")
    }

    /// The storage root aide derives from [`home`](Self::home).
    pub fn store_root(&self) -> PathBuf {
        self.home().join(".aide")
    }

    /// The project directory.
    pub fn project(&self) -> PathBuf {
        self.temp_dir.path().join("project")
    }

    /// Write a file relative to the storage root, creating parents.
    pub fn write_store_file(&self, path: &str, content: &str) {
        write_with_parents(&self.store_root().join(path), content);
    }

    /// Write a file relative to the project root, creating parents.
    pub fn write_project_file(&self, path: &str, content: &str) {
        write_with_parents(&self.project().join(path), content);
    }

    /// Read a file relative to the project root.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read_project_file(&self, path: &str) -> String {
        let full_path = self.project().join(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Assert that `path` (relative to the project root) exists.
    pub fn assert_project_file_exists(&self, path: &str) {
        let full_path = self.project().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the project root) does **not** exist.
    pub fn assert_project_file_not_exists(&self, path: &str) {
        let full_path = self.project().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the project file at `path` contains `content`.
    pub fn assert_project_file_contains(&self, path: &str, content: &str) {
        let file_content = self.read_project_file(path);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            path,
            content,
            file_content
        );
    }
}

fn write_with_parents(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}
