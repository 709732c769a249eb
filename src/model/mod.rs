//! Data models for blogql.
//!
//! - [`Blog`]: a blog post row as stored in the `blogs` table

mod blog;

pub use blog::{Blog, MAX_TITLE_LENGTH};
