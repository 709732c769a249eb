use std::sync::Arc;

use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Schema};

use crate::pagination::Page;
use crate::storage::BlogRepository;

use super::types::*;

pub type BlogSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub struct AppState {
    pub repo: BlogRepository,
}

pub fn build_schema(repo: BlogRepository) -> BlogSchema {
    let state = Arc::new(AppState { repo });

    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(state)
        .finish()
}

fn get_repo<'a>(ctx: &'a Context<'_>) -> async_graphql::Result<&'a BlogRepository> {
    let state = ctx.data::<Arc<AppState>>()?;
    Ok(&state.repo)
}

pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// List blogs ordered by id.
    ///
    /// `limit` defaults to 10 when absent, non-positive or above 20.
    /// A negative `offset` is treated as 0. On a storage error the field
    /// resolves to null next to the error.
    async fn blogs(
        &self,
        ctx: &Context<'_>,
        limit: Option<i32>,
        offset: Option<i32>,
    ) -> async_graphql::Result<Option<Vec<Option<Blog>>>> {
        let page = Page::normalize(limit, offset);
        let repo = get_repo(ctx)?;

        let blogs = repo.list(page).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to list blogs");
            e
        })?;

        Ok(Some(blogs.into_iter().map(|b| Some(Blog::from(b))).collect()))
    }
}
