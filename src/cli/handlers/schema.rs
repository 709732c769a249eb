use crate::graphql::build_schema;
use crate::storage::BlogRepository;
use anyhow::Result;

/// Print the SDL. The schema is built over a throwaway in-memory database so
/// the configured file is never touched.
pub fn handle_schema() -> Result<()> {
    let sdl = tokio::runtime::Runtime::new()?.block_on(async {
        let repo = BlogRepository::connect_in_memory().await?;
        anyhow::Ok(build_schema(repo).sdl())
    })?;

    print!("{}", sdl);
    Ok(())
}
