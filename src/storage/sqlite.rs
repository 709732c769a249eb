use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use super::schema;
use crate::error::{BlogError, Result};
use crate::model::{Blog, MAX_TITLE_LENGTH};
use crate::pagination::Page;

/// SQLite-backed blog storage.
///
/// Cloning is cheap and shares the underlying pool.
#[derive(Clone, Debug)]
pub struct BlogRepository {
    pool: SqlitePool,
}

impl BlogRepository {
    /// Open a database file, creating it and its parent directory if needed.
    pub async fn connect(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;

        tracing::debug!(path = %path.display(), "Opened database");
        Ok(Self { pool })
    }

    /// Open an in-memory database (for testing)
    ///
    /// The pool holds exactly one connection that never expires, otherwise
    /// each new connection would see its own empty database.
    pub async fn connect_in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    /// Create the `blogs` table when it does not exist yet.
    pub async fn migrate(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            sqlx::query(*stmt).execute(&self.pool).await?;
        }
        tracing::debug!("Schema synchronized");
        Ok(())
    }

    /// Fetch one page of blogs, ordered by id.
    pub async fn list(&self, page: Page) -> Result<Vec<Blog>> {
        let blogs = sqlx::query_as::<_, Blog>(
            "SELECT id, title, content FROM blogs ORDER BY id ASC LIMIT ? OFFSET ?",
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(
            limit = page.limit(),
            offset = page.offset(),
            rows = blogs.len(),
            "Listed blogs"
        );
        Ok(blogs)
    }

    pub async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM blogs")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Insert a blog and return it with its assigned id.
    pub async fn insert(&self, title: &str, content: &str) -> Result<Blog> {
        if title.chars().count() > MAX_TITLE_LENGTH {
            return Err(BlogError::Validation(format!(
                "Title exceeds maximum length of {} characters",
                MAX_TITLE_LENGTH
            )));
        }

        let result = sqlx::query("INSERT INTO blogs (title, content) VALUES (?, ?)")
            .bind(title)
            .bind(content)
            .execute(&self.pool)
            .await?;

        Ok(Blog::new(result.last_insert_rowid(), title, content))
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
