use anyhow::{Context, Result};
use clap::Parser;

use blogql::cli::handlers::{CommandContext, handle_query, handle_schema, handle_serve};
use blogql::cli::{Cli, Commands};
use blogql::config::BlogConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    blogql::logging::init(cli.verbose, cli.log_file.clone());

    let cwd = std::env::current_dir()?;
    let mut config = BlogConfig::load(cli.config.as_deref(), &cwd)
        .context("Failed to load blogql configuration")?;
    if let Some(database) = cli.database {
        config.database.path = database;
    }
    let ctx = CommandContext::new(config);

    match cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
    }) {
        Commands::Serve { host, port } => handle_serve(ctx, host, port),
        Commands::Query { query, variables } => handle_query(ctx, query, variables),
        Commands::Schema => handle_schema(),
    }
}
