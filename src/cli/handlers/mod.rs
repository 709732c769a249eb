mod query;
mod schema;
mod serve;

pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::BlogConfig;
use crate::storage::BlogRepository;
use anyhow::{Context, Result};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: BlogConfig,
}

impl CommandContext {
    pub fn new(config: BlogConfig) -> Self {
        Self { config }
    }

    /// Connect to the configured database and synchronize its schema.
    ///
    /// A connection failure is returned; a migration failure is only logged.
    pub async fn open_repository(&self) -> Result<BlogRepository> {
        let path = &self.config.database.path;
        let repo = BlogRepository::connect(path)
            .await
            .with_context(|| format!("Failed to open database at {}", path.display()))?;

        if let Err(e) = repo.migrate().await {
            tracing::error!(error = %e, "Schema migration failed");
        }

        Ok(repo)
    }
}
