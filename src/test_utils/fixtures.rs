use std::path::PathBuf;

use tempfile::TempDir;

use crate::catalog::Assessment;
use crate::queries::LabeledQuery;

/// Isolated scratch directory for catalog, query and config files.
pub struct UnitTestFixture {
    pub temp_dir: TempDir,
    pub data_path: PathBuf,
}

impl Default for UnitTestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitTestFixture {
    #[must_use]
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_path = temp_dir.path().to_path_buf();

        println!("[FIXTURE] Created temp directory: {data_path:?}");

        Self {
            temp_dir,
            data_path,
        }
    }

    /// Create a file relative to the fixture root.
    #[must_use]
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.data_path.join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        println!(
            "[FIXTURE] Created file: {:?} ({} bytes)",
            full_path,
            content.len()
        );
        full_path
    }

    /// Write `entries` as a catalog JSON file.
    #[must_use]
    pub fn create_catalog(&self, relative_path: &str, entries: &[Assessment]) -> PathBuf {
        let json = serde_json::to_string_pretty(entries).expect("serialize catalog");
        self.create_file(relative_path, &json)
    }

    /// Write `queries` as a labeled query JSON file.
    #[must_use]
    pub fn create_queries(&self, relative_path: &str, queries: &[LabeledQuery]) -> PathBuf {
        let json = serde_json::to_string_pretty(queries).expect("serialize queries");
        self.create_file(relative_path, &json)
    }

    /// Write a project-level `.arec/config.toml`.
    #[must_use]
    pub fn create_project_config(&self, content: &str) -> PathBuf {
        self.create_file(".arec/config.toml", content)
    }
}

impl Drop for UnitTestFixture {
    fn drop(&mut self) {
        println!("[FIXTURE] Cleaning up temp directory: {:?}", self.data_path);
    }
}
