//! # blogql - a paginated GraphQL endpoint over SQLite
//!
//! blogql serves a single `Blog` entity stored in a SQLite file through one
//! GraphQL query field, `blogs(limit, offset)`.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve on http://0.0.0.0:8080/graphql using ./storage/storage.db
//! blogql
//!
//! # Query from the command line
//! blogql query '{ blogs(limit: 5) { id title } }'
//!
//! # Print the schema
//! blogql schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: The `Blog` record
//! - [`pagination`]: `limit`/`offset` normalization
//! - [`storage`]: SQLite access and auto-migration

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Handles the optional `blogql.toml` file and its defaults.
pub mod config;

/// Error types and result aliases.
///
/// Defines `BlogError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers and HTTP server.
pub mod graphql;

pub mod logging;

/// Data models.
pub mod model;

pub mod pagination;

/// SQLite storage layer.
///
/// Opens the database, creates the `blogs` table and reads pages of rows.
pub mod storage;
