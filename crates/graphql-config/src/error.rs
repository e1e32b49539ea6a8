//! Error types for graphql-config

use std::path::PathBuf;

/// Result type for graphql-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Prefix placed in front of the YAML parser's diagnostic for syntax errors.
pub const INVALID_CONTENT_PREFIX: &str = "invalid configuration file content: ";

/// Errors that can occur while loading a configuration file
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration file not found at {path}: {source}")]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration file extension: {path} (expected .yaml or .yml)")]
    InvalidExtension { path: PathBuf },

    #[error("Invalid configuration at {path}: {message}")]
    InvalidContent { path: PathBuf, message: String },

    #[error("Empty configuration file: {path}")]
    EmptyConfiguration { path: PathBuf },

    #[error("Invalid endpoint '{name}' in extensions: {message}")]
    InvalidEndpoint { name: String, message: String },
}

/// Failure class of an [`Error`], for callers that only need to branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    FileNotFound,
    InvalidExtension,
    InvalidContent,
    EmptyConfiguration,
    InvalidEndpoint,
}

impl Error {
    pub fn file_not_found(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileNotFound {
            path: path.into(),
            source,
        }
    }

    /// Wrap a YAML parser diagnostic, keeping its text intact.
    pub fn syntax(path: impl Into<PathBuf>, parser_message: impl std::fmt::Display) -> Self {
        Self::InvalidContent {
            path: path.into(),
            message: format!("{INVALID_CONTENT_PREFIX}{parser_message}"),
        }
    }

    pub fn shape(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InvalidContent {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::FileNotFound { .. } => ErrorKind::FileNotFound,
            Error::InvalidExtension { .. } => ErrorKind::InvalidExtension,
            Error::InvalidContent { .. } => ErrorKind::InvalidContent,
            Error::EmptyConfiguration { .. } => ErrorKind::EmptyConfiguration,
            Error::InvalidEndpoint { .. } => ErrorKind::InvalidEndpoint,
        }
    }
}
