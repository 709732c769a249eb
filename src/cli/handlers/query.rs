use crate::graphql::build_schema;
use anyhow::Result;

use super::CommandContext;

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    let vars: async_graphql::Variables = if let Some(v) = variables {
        serde_json::from_str(&v)?
    } else {
        async_graphql::Variables::default()
    };

    let response = tokio::runtime::Runtime::new()?.block_on(async {
        let repo = ctx.open_repository().await?;
        let schema = build_schema(repo.clone());

        let request = async_graphql::Request::new(query).variables(vars);
        let response = schema.execute(request).await;
        repo.close().await;
        anyhow::Ok(response)
    })?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
