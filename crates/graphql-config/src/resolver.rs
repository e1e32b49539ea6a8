//! Expansion of a configuration into independent projects
//!
//! Resolution order is fixed:
//!
//! 1. The root project, if any root-level field is set
//! 2. Named projects, in the order they were declared
//!
//! Named projects never inherit root-level values. A configuration with
//! neither produces no projects and no error.

use crate::config::Config;
use crate::constants::ROOT_PROJECT_NAME;
use crate::project::GraphqlProject;

/// Output path prefix given to every resolved project.
const OUTPUT_PATH_PREFIX: &str = "";

/// Resolves a [`Config`] into the ordered list of projects to generate.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProjectResolver;

impl ProjectResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve the projects described by `config`.
    ///
    /// # Example
    ///
    /// ```
    /// use graphql_config::{ConfigLoader, ProjectResolver, ROOT_PROJECT_NAME};
    ///
    /// let config = ConfigLoader::new()
    ///     .parse_str(
    ///         r#"
    /// schema: schema.graphql
    /// projects:
    ///   admin:
    ///     schema: admin.graphql
    /// "#,
    ///         "graphql.config.yaml",
    ///     )
    ///     .unwrap();
    ///
    /// let projects = ProjectResolver::new().resolve(&config);
    /// let names: Vec<_> = projects.iter().map(|p| p.name()).collect();
    /// assert_eq!(names, vec![ROOT_PROJECT_NAME, "admin"]);
    /// ```
    pub fn resolve(&self, config: &Config) -> Vec<GraphqlProject> {
        let named = config.projects.as_deref().unwrap_or_default();
        let mut projects = Vec::with_capacity(named.len() + 1);

        if config.has_root_fields() {
            projects.push(GraphqlProject::new(
                ROOT_PROJECT_NAME,
                config.schema.clone(),
                config.documents.clone(),
                config.extensions.clone(),
                OUTPUT_PATH_PREFIX,
            ));
        }

        for (name, project) in named {
            projects.push(GraphqlProject::new(
                name.clone(),
                project.schema.clone(),
                project.documents.clone(),
                project.extensions.clone(),
                OUTPUT_PATH_PREFIX,
            ));
        }

        if projects.is_empty() {
            tracing::warn!("Configuration declares no projects; nothing will be generated");
        } else {
            tracing::info!(count = projects.len(), "Resolved GraphQL projects");
        }

        projects
    }
}

/// Resolve projects with the default resolver.
pub fn resolve_projects(config: &Config) -> Vec<GraphqlProject> {
    ProjectResolver::new().resolve(config)
}
