//! Provision command handler.
//!
//! Provisions a hosted MCP server from a short auth-config id and prints
//! the normalized SSE URL.

use mcpbridge_core::{ServerProvisionRequest, ShortIdServerSpec};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the provision command.
pub async fn execute(ctx: &CliContext, nanoid: &str, ttl: &str) -> Result<(), CliError> {
    let spec = ShortIdServerSpec {
        nanoid: nanoid.to_string(),
        ttl: ttl.to_string(),
    };
    let result = ctx
        .app()
        .mcp_servers()
        .provision(ServerProvisionRequest::ShortId(spec))
        .await?;

    println!("MCP server created.");
    println!();
    println!("  URL:           {}", result.url);
    println!("  Server id:     {}", result.server_id);
    println!("  Provider URL:  {}", result.provider_url);
    Ok(())
}
