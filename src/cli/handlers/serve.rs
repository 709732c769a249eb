use std::net::IpAddr;

use crate::graphql::{GRAPHQL_PATH, build_schema, run_server};
use anyhow::Result;

use super::CommandContext;

pub fn handle_serve(
    mut ctx: CommandContext,
    host: Option<IpAddr>,
    port: Option<u16>,
) -> Result<()> {
    if let Some(host) = host {
        ctx.config.server.host = host;
    }
    if let Some(port) = port {
        ctx.config.server.port = port;
    }
    let addr = ctx.config.listen_addr();

    tokio::runtime::Runtime::new()?.block_on(async {
        let repo = ctx.open_repository().await?;
        match repo.count().await {
            Ok(rows) => tracing::info!(
                rows,
                path = %ctx.config.database.path.display(),
                "Database ready"
            ),
            Err(e) => tracing::warn!(error = %e, "Could not count blogs"),
        }

        let schema = build_schema(repo);

        println!("Starting GraphQL server on http://{}{}", addr, GRAPHQL_PATH);
        println!("GraphiQL: http://{}{}", addr, GRAPHQL_PATH);

        run_server(schema, addr).await?;
        anyhow::Ok(())
    })
}
