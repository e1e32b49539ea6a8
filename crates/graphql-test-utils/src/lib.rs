//! Shared test utilities for the graphql-config workspace.
//!
//! This crate is a dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`compare`] — whitespace-insensitive comparison of generated sources
//! - [`fixture`] — [`ConfigFixture`] builder for configuration files on disk

pub mod compare;
pub mod fixture;

pub use compare::{
    assert_generated_contains, assert_generated_contains_file, contains_normalized, normalize,
};
pub use fixture::ConfigFixture;
