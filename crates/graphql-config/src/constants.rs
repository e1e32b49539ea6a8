//! Reserved names and recognized keys of the configuration file.

/// Name given to the implicit project built from root-level fields.
pub const ROOT_PROJECT_NAME: &str = "root";

/// Path suffixes accepted for configuration files (same YAML dialect).
pub const CONFIG_SUFFIXES: [&str; 2] = [".yaml", ".yml"];

/// Extension entry holding endpoint definitions.
pub const ENDPOINTS_EXTENSION: &str = "endpoints";

/// Endpoint used when no name is given.
pub const DEFAULT_ENDPOINT_NAME: &str = "default";

/// Keys recognized in a configuration mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    /// Path or URL of the GraphQL schema
    Schema,
    /// Operation document paths
    Documents,
    /// Generator-specific extensions
    Extensions,
    /// Named sub-projects (top level only)
    Projects,
}

impl ConfigKey {
    /// Keys allowed inside a named project.
    pub const PROJECT_KEYS: [ConfigKey; 3] =
        [ConfigKey::Schema, ConfigKey::Documents, ConfigKey::Extensions];

    /// Keys allowed at the top level of the file.
    pub const ROOT_KEYS: [ConfigKey; 4] = [
        ConfigKey::Schema,
        ConfigKey::Documents,
        ConfigKey::Extensions,
        ConfigKey::Projects,
    ];

    /// Get the string representation of the key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Schema => "schema",
            Self::Documents => "documents",
            Self::Extensions => "extensions",
            Self::Projects => "projects",
        }
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Check whether `path` ends with one of [`CONFIG_SUFFIXES`] (case-sensitive).
pub fn has_config_suffix(path: &str) -> bool {
    CONFIG_SUFFIXES.iter().any(|suffix| path.ends_with(suffix))
}
