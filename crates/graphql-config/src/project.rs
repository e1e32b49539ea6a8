//! Resolved GraphQL projects handed to code generators

use serde::Serialize;

use crate::config::Extensions;
use crate::constants::ROOT_PROJECT_NAME;

/// One independently generated unit: a schema, its documents and extensions.
///
/// Instances are produced by [`crate::ProjectResolver`] and never modified
/// afterwards; equality is structural.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlProject {
    name: String,
    schema: Option<String>,
    documents: Option<Vec<String>>,
    extensions: Option<Extensions>,
    output_path_prefix: String,
}

impl GraphqlProject {
    pub fn new(
        name: impl Into<String>,
        schema: Option<String>,
        documents: Option<Vec<String>>,
        extensions: Option<Extensions>,
        output_path_prefix: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            schema,
            documents,
            extensions,
            output_path_prefix: output_path_prefix.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    pub fn documents(&self) -> Option<&[String]> {
        self.documents.as_deref()
    }

    pub fn extensions(&self) -> Option<&Extensions> {
        self.extensions.as_ref()
    }

    /// Relative directory for this project's generated artifacts.
    pub fn output_path_prefix(&self) -> &str {
        &self.output_path_prefix
    }

    /// Whether this is the implicit project built from root-level fields.
    pub fn is_root(&self) -> bool {
        self.name == ROOT_PROJECT_NAME
    }

    /// Classify the schema reference as a remote URL or a local file.
    pub fn schema_source(&self) -> Option<SchemaSource<'_>> {
        self.schema().map(SchemaSource::classify)
    }
}

/// Where a project's schema comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaSource<'a> {
    /// Fetched by introspecting an HTTP endpoint
    Url(&'a str),
    /// Read from a local schema file
    File(&'a str),
}

impl<'a> SchemaSource<'a> {
    pub fn classify(reference: &'a str) -> Self {
        let lower = reference.trim_start().to_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            SchemaSource::Url(reference)
        } else {
            SchemaSource::File(reference)
        }
    }

    pub fn as_str(&self) -> &'a str {
        match self {
            SchemaSource::Url(s) | SchemaSource::File(s) => s,
        }
    }

    pub fn is_url(&self) -> bool {
        matches!(self, SchemaSource::Url(_))
    }
}
