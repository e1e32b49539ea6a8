//! Configuration loading and project resolution for GraphQL code generators.
//!
//! A configuration file describes one or more GraphQL API surfaces. This
//! crate reads it, validates its structure and expands it into an ordered
//! list of [`GraphqlProject`]s, each generated independently:
//!
//! ```text
//! graphql.config.yaml -> ConfigLoader -> Config -> ProjectResolver -> [GraphqlProject]
//! ```
//!
//! # Example
//!
//! ```no_run
//! use graphql_config::{load_config, resolve_projects};
//!
//! let config = load_config("graphql.config.yaml")?;
//! for project in resolve_projects(&config) {
//!     println!("{}: {:?}", project.name(), project.schema());
//! }
//! # Ok::<(), graphql_config::Error>(())
//! ```

pub mod config;
pub mod constants;
pub mod document;
pub mod error;
pub mod loader;
pub mod logging;
pub mod project;
pub mod resolver;

pub use config::{Config, Endpoint, Extensions, ProjectConfig};
pub use constants::{ConfigKey, ROOT_PROJECT_NAME};
pub use error::{Error, ErrorKind, Result};
pub use loader::{ConfigLoader, load_config};
pub use project::{GraphqlProject, SchemaSource};
pub use resolver::{ProjectResolver, resolve_projects};
