//! Serve command handler.
//!
//! Runs the HTTP service in the foreground until Ctrl+C.

use mcpbridge_core::Settings;

use crate::error::CliError;

/// Execute the serve command.
pub async fn execute(settings: &Settings) -> Result<(), CliError> {
    // Fail with a config exit code before anything is bound
    settings.validate()?;

    println!();
    println!("  mcpbridge web server starting...");
    println!();
    println!("  Listening on: http://{}", settings.bind_addr());
    println!("  Provider v1:  {}", settings.api_url());
    println!("  Provider v3:  {}", settings.api_v3_url());
    println!("  Public MCP:   {}", settings.mcp_public_url());
    println!();
    println!("  Press Ctrl+C to stop");
    println!();

    mcpbridge_axum::start_server(settings)
        .await
        .map_err(|e| CliError::Core(format!("{e:#}")))
}
