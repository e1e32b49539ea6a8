//! Typed configuration produced by the loader
//!
//! A [`Config`] mirrors the configuration file one-to-one:
//!
//! ```yaml
//! schema: schema.graphql
//! documents: [queries/*.graphql]
//! extensions:
//!   endpoints:
//!     default:
//!       url: https://api.example.com/graphql
//! projects:
//!   payments:
//!     schema: payments.graphql
//! ```
//!
//! Root-level fields and `projects` are independent. A named project never
//! inherits the root-level `schema`, `documents` or `extensions`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::constants::{DEFAULT_ENDPOINT_NAME, ENDPOINTS_EXTENSION};
use crate::error::{Error, Result};

/// Root parse result of a configuration file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    /// Path or URL of the root-level GraphQL schema
    pub schema: Option<String>,
    /// Root-level operation documents, in file order
    pub documents: Option<Vec<String>>,
    /// Root-level generator extensions
    pub extensions: Option<Extensions>,
    /// Named projects in the order they were declared
    pub projects: Option<Vec<(String, ProjectConfig)>>,
}

impl Config {
    /// Whether any of `schema`, `documents` or `extensions` is set at the top level.
    pub fn has_root_fields(&self) -> bool {
        self.schema.is_some() || self.documents.is_some() || self.extensions.is_some()
    }

    /// Look up a named project's configuration.
    pub fn project(&self, name: &str) -> Option<&ProjectConfig> {
        self.projects
            .as_ref()?
            .iter()
            .find(|(project_name, _)| project_name == name)
            .map(|(_, config)| config)
    }

    /// Names of the declared projects, in declaration order.
    pub fn project_names(&self) -> impl Iterator<Item = &str> {
        self.projects
            .iter()
            .flatten()
            .map(|(name, _)| name.as_str())
    }
}

/// Configuration of a single named project.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectConfig {
    pub schema: Option<String>,
    pub documents: Option<Vec<String>>,
    pub extensions: Option<Extensions>,
}

/// Generator-specific extensions attached to a project.
///
/// The mapping is kept as written, in file order. Project resolution never
/// looks inside it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Extensions(Mapping);

impl Extensions {
    pub fn new(mapping: Mapping) -> Self {
        Self(mapping)
    }

    /// Get a raw extension entry by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_mapping(&self) -> &Mapping {
        &self.0
    }

    /// Parse the `endpoints` extension into typed endpoints, in file order.
    ///
    /// Returns an empty list when no `endpoints` entry exists.
    pub fn endpoints(&self) -> Result<Vec<(String, Endpoint)>> {
        let Some(raw) = self.get(ENDPOINTS_EXTENSION) else {
            return Ok(Vec::new());
        };

        let Value::Mapping(entries) = raw else {
            return Err(Error::InvalidEndpoint {
                name: ENDPOINTS_EXTENSION.to_string(),
                message: "expected a mapping of endpoint names to endpoints".to_string(),
            });
        };

        let mut endpoints = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            let Value::String(name) = key else {
                return Err(Error::InvalidEndpoint {
                    name: format!("{key:?}"),
                    message: "endpoint names must be strings".to_string(),
                });
            };
            let endpoint: Endpoint =
                serde_yaml::from_value(value.clone()).map_err(|e| Error::InvalidEndpoint {
                    name: name.clone(),
                    message: e.to_string(),
                })?;
            endpoints.push((name.clone(), endpoint));
        }

        Ok(endpoints)
    }

    /// The endpoint named `default`, if declared.
    pub fn default_endpoint(&self) -> Result<Option<Endpoint>> {
        Ok(self
            .endpoints()?
            .into_iter()
            .find(|(name, _)| name == DEFAULT_ENDPOINT_NAME)
            .map(|(_, endpoint)| endpoint))
    }
}

impl From<Mapping> for Extensions {
    fn from(mapping: Mapping) -> Self {
        Self(mapping)
    }
}

/// A GraphQL endpoint used to introspect the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Endpoint {
    /// Endpoint URL
    pub url: String,
    /// HTTP headers sent with the introspection request
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    /// Whether the schema should be introspected from this endpoint
    #[serde(default)]
    pub introspect: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extensions(yaml: &str) -> Extensions {
        let mapping: Mapping = serde_yaml::from_str(yaml).unwrap();
        Extensions::new(mapping)
    }

    #[test]
    fn test_has_root_fields() {
        assert!(!Config::default().has_root_fields());

        let config = Config {
            documents: Some(vec!["query.graphql".to_string()]),
            ..Default::default()
        };
        assert!(config.has_root_fields());

        let config = Config {
            extensions: Some(Extensions::default()),
            ..Default::default()
        };
        assert!(config.has_root_fields());
    }

    #[test]
    fn test_projects_do_not_count_as_root_fields() {
        let config = Config {
            projects: Some(vec![("alpha".to_string(), ProjectConfig::default())]),
            ..Default::default()
        };
        assert!(!config.has_root_fields());
        assert_eq!(config.project_names().collect::<Vec<_>>(), vec!["alpha"]);
        assert!(config.project("alpha").is_some());
        assert!(config.project("beta").is_none());
    }

    #[test]
    fn test_endpoints_in_file_order() {
        let ext = extensions(
            r#"
endpoints:
  staging:
    url: https://staging.example.com/graphql
  default:
    url: https://example.com/graphql
    headers:
      Authorization: Bearer token
    introspect: true
"#,
        );

        let endpoints = ext.endpoints().unwrap();
        let names: Vec<_> = endpoints.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["staging", "default"]);

        let default = ext.default_endpoint().unwrap().unwrap();
        assert_eq!(default.url, "https://example.com/graphql");
        assert_eq!(default.headers["Authorization"], "Bearer token");
        assert_eq!(default.introspect, Some(true));
    }

    #[test]
    fn test_endpoints_absent() {
        let ext = extensions("codegen: { flavor: client }");
        assert!(ext.endpoints().unwrap().is_empty());
        assert!(ext.default_endpoint().unwrap().is_none());
    }

    #[test]
    fn test_endpoint_missing_url() {
        let ext = extensions("endpoints: { default: { introspect: false } }");
        let err = ext.endpoints().unwrap_err();
        assert!(matches!(err, Error::InvalidEndpoint { ref name, .. } if name == "default"));
    }

    #[test]
    fn test_endpoints_not_a_mapping() {
        let ext = extensions("endpoints: [a, b]");
        assert!(matches!(
            ext.endpoints(),
            Err(Error::InvalidEndpoint { .. })
        ));
    }
}
