//! GraphQL schema, resolvers and HTTP server for blogql.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! blogql serve --port 8080
//!
//! # Execute a query from CLI
//! blogql query '{ blogs(limit: 5, offset: 10) { id title } }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `blogs(limit: Int, offset: Int)`
//! - **Mutations**: none

mod schema;
mod server;
mod types;

pub use schema::{AppState, BlogSchema, QueryRoot, build_schema};
pub use server::{GRAPHQL_PATH, router, run_server};
pub use types::*;
