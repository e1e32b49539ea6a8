//! Loading configuration files from disk
//!
//! Only YAML is accepted, from paths ending in `.yaml` or `.yml`.
//! The suffix is checked before the file is touched.

use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::constants::has_config_suffix;
use crate::document::{build_config, parse_document};
use crate::error::{Error, Result};

/// Loads and validates configuration files.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Create a new ConfigLoader
    pub fn new() -> Self {
        Self
    }

    /// Load a configuration file.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidExtension`] if the path does not end in `.yaml`/`.yml`
    /// - [`Error::FileNotFound`] if the file cannot be read
    /// - [`Error::EmptyConfiguration`] if the file is blank or `null`
    /// - [`Error::InvalidContent`] on invalid UTF-8, syntax or shape errors
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();

        if !path.to_str().is_some_and(has_config_suffix) {
            return Err(Error::InvalidExtension {
                path: path.to_path_buf(),
            });
        }

        tracing::debug!(path = %path.display(), "Reading configuration file");
        let bytes = fs::read(path).map_err(|e| Error::file_not_found(path, e))?;
        let content = String::from_utf8(bytes).map_err(|e| Error::syntax(path, e))?;

        self.parse_str(&content, path)
    }

    /// Parse configuration content that is already in memory.
    ///
    /// `origin` is only used to label errors.
    pub fn parse_str(&self, content: &str, origin: impl AsRef<Path>) -> Result<Config> {
        let origin = origin.as_ref();
        let document = parse_document(content, origin)?;
        build_config(&document, origin)
    }
}

/// Load a configuration file with the default loader.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config> {
    ConfigLoader::new().load(path)
}
