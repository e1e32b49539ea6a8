//! [`ConfigFixture`] builder for configuration file test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding configuration files written by a test.
///
/// # Example
///
/// ```rust,no_run
/// use graphql_test_utils::ConfigFixture;
///
/// let fixture = ConfigFixture::new();
/// let path = fixture.write("graphql.config.yaml", "schema: schema.graphql\n");
/// assert!(path.exists());
/// ```
pub struct ConfigFixture {
    temp_dir: TempDir,
}

impl Default for ConfigFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigFixture {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of `name` inside the fixture, whether or not it exists.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Write `content` to `name` (relative to the root), creating parent
    /// directories, and return the full path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Write a configuration with the given root-level fields and named
    /// projects, each project given as `(name, schema)`.
    pub fn write_config(
        &self,
        name: &str,
        schema: Option<&str>,
        documents: &[&str],
        projects: &[(&str, &str)],
    ) -> PathBuf {
        let mut content = String::new();

        if let Some(schema) = schema {
            content.push_str(&format!("schema: \"{schema}\"\n"));
        }

        if !documents.is_empty() {
            content.push_str("documents:\n");
            for document in documents {
                content.push_str(&format!("  - \"{document}\"\n"));
            }
        }

        if !projects.is_empty() {
            content.push_str("projects:\n");
            for (project, project_schema) in projects {
                content.push_str(&format!("  \"{project}\":\n    schema: \"{project_schema}\"\n"));
            }
        }

        self.write(name, &content)
    }

    /// Copy a file from `source` into the fixture under `name`.
    pub fn copy_from(&self, source: impl AsRef<Path>, name: &str) -> PathBuf {
        let content = fs::read_to_string(source.as_ref()).unwrap_or_else(|e| {
            panic!("Could not read fixture source {}: {e}", source.as_ref().display())
        });
        self.write(name, &content)
    }
}
