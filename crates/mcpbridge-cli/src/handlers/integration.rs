//! Integration command handler.

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the integration command: create an OAuth2 integration only.
pub async fn execute(ctx: &CliContext, app: &str, name: Option<&str>) -> Result<(), CliError> {
    let integration = ctx
        .app()
        .connections()
        .create_integration(app, name)
        .await?;

    println!("Integration created.");
    println!();
    println!("  Id:   {}", integration.id);
    println!("  App:  {} ({})", integration.app_name, integration.app_id);
    Ok(())
}
