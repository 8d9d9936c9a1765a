//! Normalize command handler (offline).

use mcpbridge_core::{Settings, normalize_server_url};

use crate::bootstrap::public_url;
use crate::error::CliError;

/// Execute the normalize command.
pub fn execute(settings: &Settings, raw: &str) -> Result<(), CliError> {
    println!("{}", normalize(settings, raw)?);
    Ok(())
}

fn normalize(settings: &Settings, raw: &str) -> Result<String, CliError> {
    let base = public_url(settings)?;
    Ok(normalize_server_url(raw, &base)?.into())
}
