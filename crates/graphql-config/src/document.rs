//! Two-phase reading of configuration content
//!
//! Content is first parsed into a generic YAML tree ([`parse_document`]),
//! then checked key by key and turned into a typed [`Config`]
//! ([`build_config`]). No typed value exists until the whole tree is valid.

use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::config::{Config, Extensions, ProjectConfig};
use crate::constants::{ConfigKey, ROOT_PROJECT_NAME};
use crate::error::{Error, Result};

/// Parse raw content into a YAML tree.
///
/// Blank content and an explicit `null` document are both reported as
/// [`Error::EmptyConfiguration`]; syntax errors as [`Error::InvalidContent`].
pub fn parse_document(content: &str, origin: &Path) -> Result<Value> {
    if content.trim().is_empty() {
        return Err(Error::EmptyConfiguration {
            path: origin.to_path_buf(),
        });
    }

    let document: Value = serde_yaml::from_str(content).map_err(|e| Error::syntax(origin, e))?;

    if document.is_null() {
        return Err(Error::EmptyConfiguration {
            path: origin.to_path_buf(),
        });
    }

    Ok(document)
}

/// Validate a parsed tree and build the typed configuration.
pub fn build_config(document: &Value, origin: &Path) -> Result<Config> {
    let root = match document {
        Value::Null => {
            return Err(Error::EmptyConfiguration {
                path: origin.to_path_buf(),
            });
        }
        Value::Mapping(mapping) => mapping,
        other => {
            return Err(Error::shape(
                origin,
                format!(
                    "expected a mapping at the top level, found {}",
                    describe(other)
                ),
            ));
        }
    };

    let mut config = Config::default();
    for (key, value) in root {
        let name = key_name(key, "", origin)?;
        match lookup_key(name, &ConfigKey::ROOT_KEYS) {
            Some(ConfigKey::Schema) => config.schema = read_string(value, name, origin)?,
            Some(ConfigKey::Documents) => config.documents = read_documents(value, name, origin)?,
            Some(ConfigKey::Extensions) => {
                config.extensions = read_extensions(value, name, origin)?
            }
            Some(ConfigKey::Projects) => config.projects = read_projects(value, origin)?,
            None => return Err(unknown_key(name, origin)),
        }
    }

    if config.has_root_fields() && config.project_names().any(|n| n == ROOT_PROJECT_NAME) {
        return Err(Error::shape(
            origin,
            format!(
                "project name '{ROOT_PROJECT_NAME}' is reserved for the root-level project"
            ),
        ));
    }

    tracing::debug!(
        origin = %origin.display(),
        root = config.has_root_fields(),
        projects = config.project_names().count(),
        "Validated configuration document"
    );

    Ok(config)
}

fn read_projects(value: &Value, origin: &Path) -> Result<Option<Vec<(String, ProjectConfig)>>> {
    let key = ConfigKey::Projects.as_str();
    let entries = match value {
        Value::Null => return Ok(None),
        Value::Mapping(entries) => entries,
        other => return Err(wrong_type(key, "a mapping of project names", other, origin)),
    };

    // Duplicate names never reach this point: the YAML parser rejects
    // repeated mapping keys as a syntax error.
    let mut projects = Vec::with_capacity(entries.len());
    for (name, body) in entries {
        let name = key_name(name, key, origin)?;
        let path = format!("{key}.{name}");
        let project = match body {
            Value::Null => ProjectConfig::default(),
            Value::Mapping(fields) => read_project(fields, &path, origin)?,
            other => return Err(wrong_type(&path, "a mapping", other, origin)),
        };
        projects.push((name.to_string(), project));
    }

    Ok(Some(projects))
}

fn read_project(fields: &Mapping, path: &str, origin: &Path) -> Result<ProjectConfig> {
    let mut project = ProjectConfig::default();
    for (key, value) in fields {
        let name = key_name(key, path, origin)?;
        let field_path = format!("{path}.{name}");
        match lookup_key(name, &ConfigKey::PROJECT_KEYS) {
            Some(ConfigKey::Schema) => project.schema = read_string(value, &field_path, origin)?,
            Some(ConfigKey::Documents) => {
                project.documents = read_documents(value, &field_path, origin)?
            }
            Some(ConfigKey::Extensions) => {
                project.extensions = read_extensions(value, &field_path, origin)?
            }
            _ => return Err(unknown_key(&field_path, origin)),
        }
    }
    Ok(project)
}

fn read_string(value: &Value, path: &str, origin: &Path) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        other => scalar_string(other, path, origin).map(Some),
    }
}

/// Plain scalars (`2024`, `true`) are accepted where a string is expected.
fn scalar_string(value: &Value, path: &str, origin: &Path) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(wrong_type(path, "a string", other, origin)),
    }
}

fn read_documents(value: &Value, path: &str, origin: &Path) -> Result<Option<Vec<String>>> {
    let items = match value {
        Value::Null => return Ok(None),
        Value::Sequence(items) => items,
        other => return Err(wrong_type(path, "a list of strings", other, origin)),
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| scalar_string(item, &format!("{path}[{index}]"), origin))
        .collect::<Result<Vec<_>>>()
        .map(Some)
}

fn read_extensions(value: &Value, path: &str, origin: &Path) -> Result<Option<Extensions>> {
    match value {
        Value::Null => Ok(None),
        Value::Mapping(mapping) => Ok(Some(Extensions::new(mapping.clone()))),
        other => Err(wrong_type(path, "a mapping", other, origin)),
    }
}

fn key_name<'a>(key: &'a Value, parent: &str, origin: &Path) -> Result<&'a str> {
    match key {
        Value::String(s) => Ok(s.as_str()),
        other => {
            let location = if parent.is_empty() {
                "the top level".to_string()
            } else {
                format!("`{parent}`")
            };
            Err(Error::shape(
                origin,
                format!("keys in {location} must be strings, found {}", describe(other)),
            ))
        }
    }
}

fn lookup_key(name: &str, allowed: &[ConfigKey]) -> Option<ConfigKey> {
    allowed.iter().copied().find(|key| key.as_str() == name)
}

fn unknown_key(path: &str, origin: &Path) -> Error {
    Error::shape(origin, format!("unknown property `{path}`"))
}

fn wrong_type(path: &str, expected: &str, found: &Value, origin: &Path) -> Error {
    Error::shape(
        origin,
        format!("`{path}` must be {expected}, found {}", describe(found)),
    )
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;

    fn build(yaml: &str) -> Result<Config> {
        let origin = Path::new("graphql.config.yaml");
        let document = parse_document(yaml, origin)?;
        build_config(&document, origin)
    }

    fn message(err: Error) -> String {
        match err {
            Error::InvalidContent { message, .. } => message,
            other => panic!("expected InvalidContent, got {other:?}"),
        }
    }

    #[test]
    fn test_root_fields() {
        let config = build(
            r#"
schema: schema.graphql
documents:
  - query.graphql
  - mutation.graphql
"#,
        )
        .unwrap();

        assert_eq!(config.schema.as_deref(), Some("schema.graphql"));
        assert_eq!(
            config.documents,
            Some(vec!["query.graphql".to_string(), "mutation.graphql".to_string()])
        );
        assert!(config.extensions.is_none());
        assert!(config.projects.is_none());
    }

    #[test]
    fn test_projects_keep_declaration_order() {
        let config = build(
            r#"
projects:
  zeta: { schema: z.graphql }
  alpha: { schema: a.graphql }
  mid: { schema: m.graphql }
"#,
        )
        .unwrap();

        let names: Vec<_> = config.project_names().collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_explicit_null_is_absent() {
        let config = build("schema: ~\ndocuments: null\nprojects:\n").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_null_project_body_is_empty_project() {
        let config = build("projects:\n  bare:\n").unwrap();
        assert_eq!(config.project("bare"), Some(&ProjectConfig::default()));
    }

    #[test]
    fn test_empty_mapping_is_valid() {
        assert_eq!(build("{}").unwrap(), Config::default());
    }

    #[test]
    fn test_blank_and_null_documents_are_empty() {
        for yaml in ["", "   \n", "~", "null"] {
            let err = build(yaml).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::EmptyConfiguration, "input: {yaml:?}");
        }
    }

    #[test]
    fn test_scalar_root_rejected() {
        let msg = message(build("just a string").unwrap_err());
        assert!(msg.contains("top level"), "{msg}");
    }

    #[test]
    fn test_unknown_root_key_rejected() {
        let msg = message(build("schema: s.graphql\ngenerates: out/").unwrap_err());
        assert!(msg.contains("`generates`"), "{msg}");
    }

    #[test]
    fn test_projects_key_not_allowed_inside_project() {
        let msg = message(build("projects:\n  a:\n    projects: {}\n").unwrap_err());
        assert!(msg.contains("`projects.a.projects`"), "{msg}");
    }

    #[test]
    fn test_documents_must_be_strings() {
        let msg = message(build("documents: [ok.graphql, [nested.graphql]]").unwrap_err());
        assert!(msg.contains("`documents[1]`"), "{msg}");

        let msg = message(build("documents: [ok.graphql, ~]").unwrap_err());
        assert!(msg.contains("`documents[1]`"), "{msg}");

        let msg = message(build("documents: query.graphql").unwrap_err());
        assert!(msg.contains("a list of strings"), "{msg}");
    }

    #[test]
    fn test_plain_scalars_read_as_strings() {
        let config = build("schema: 2024\ndocuments: [42, true, 1.5, q.graphql]\n").unwrap();
        assert_eq!(config.schema.as_deref(), Some("2024"));
        assert_eq!(
            config.documents,
            Some(vec![
                "42".to_string(),
                "true".to_string(),
                "1.5".to_string(),
                "q.graphql".to_string(),
            ])
        );

        let config = build("projects:\n  a:\n    schema: 7\n").unwrap();
        assert_eq!(config.project("a").unwrap().schema.as_deref(), Some("7"));
    }

    #[test]
    fn test_duplicate_project_rejected_by_parser() {
        let err = build("projects:\n  a: { schema: a.graphql }\n  a: { schema: b.graphql }\n")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidContent);
        assert!(err.to_string().contains(crate::error::INVALID_CONTENT_PREFIX));
    }

    #[test]
    fn test_schema_must_be_string() {
        let msg = message(build("projects:\n  a:\n    schema: [x]\n").unwrap_err());
        assert!(msg.contains("`projects.a.schema`"), "{msg}");
    }

    #[test]
    fn test_extensions_must_be_mapping() {
        let msg = message(build("extensions: [x]").unwrap_err());
        assert!(msg.contains("`extensions`"), "{msg}");
    }

    #[test]
    fn test_non_string_project_name() {
        let msg = message(build("projects:\n  1: { schema: a.graphql }\n").unwrap_err());
        assert!(msg.contains("`projects`"), "{msg}");
    }

    #[test]
    fn test_reserved_project_name_with_root_fields() {
        let msg =
            message(build("schema: s.graphql\nprojects:\n  root: { schema: r.graphql }\n").unwrap_err());
        assert!(msg.contains("reserved"), "{msg}");
    }

    #[test]
    fn test_reserved_project_name_without_root_fields() {
        let config = build("projects:\n  root: { schema: r.graphql }\n").unwrap();
        assert_eq!(config.project_names().collect::<Vec<_>>(), vec!["root"]);
    }

    #[test]
    fn test_syntax_error_is_invalid_content() {
        let err = build("schema: [unclosed").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidContent);
        assert!(err.to_string().contains(crate::error::INVALID_CONTENT_PREFIX));
    }
}
