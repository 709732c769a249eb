use sqlx::FromRow;

/// Maximum length of a blog title, mirrored by the `VARCHAR(255)` column.
pub const MAX_TITLE_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub content: String,
}

impl Blog {
    pub fn new(id: i64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }
}
