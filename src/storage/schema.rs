//! Database schema definitions

/// SQL to create the blogs table
pub const CREATE_BLOGS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS blogs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title VARCHAR(255) NOT NULL DEFAULT '',
    content TEXT NOT NULL DEFAULT ''
)
"#;

/// All statements run by auto-migration, in order
pub fn all_schema_statements() -> &'static [&'static str] {
    &[CREATE_BLOGS_TABLE]
}
