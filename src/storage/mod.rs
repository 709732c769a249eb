//! SQLite storage layer for blogs.
//!
//! ## Components
//!
//! - [`BlogRepository`]: connection pool, auto-migration and paginated reads
//! - [`schema`]: DDL for the `blogs` table

pub mod schema;
mod sqlite;

pub use sqlite::BlogRepository;
