use crate::model::Blog as ModelBlog;
use async_graphql::SimpleObject;

/// A blog post
///
/// Every field is nullable in the schema, matching `Blog { id: Int, title:
/// String, content: String }`.
#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
pub struct Blog {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl From<ModelBlog> for Blog {
    fn from(b: ModelBlog) -> Self {
        Self {
            id: Some(b.id),
            title: Some(b.title),
            content: Some(b.content),
        }
    }
}
