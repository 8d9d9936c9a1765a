//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options. Every
//! setting can come from a flag or from the environment (after `.env` has
//! been loaded).

use std::net::SocketAddr;
use std::time::Duration;

use clap::{Args, Parser};
use mcpbridge_core::{
    DEFAULT_API_URL, DEFAULT_API_V3_URL, DEFAULT_BIND_ADDR, DEFAULT_LOG_LEVEL,
    DEFAULT_MCP_PUBLIC_URL, DEFAULT_TIMEOUT_SECS, Settings,
};

use crate::commands::Commands;

/// Command-line interface for the Composio connection and MCP server bridge.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "mcpbridge")]
#[command(about = "Connect apps through Composio and provision hosted MCP servers")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Process settings shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub struct SettingsArgs {
    /// Composio API key
    #[arg(long, env = "API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Base URL of the provider's v1 API
    #[arg(long, env = "COMPOSIO_API_URL", default_value = DEFAULT_API_URL, global = true)]
    pub api_url: String,

    /// Base URL of the provider's v3 API
    #[arg(long, env = "COMPOSIO_API_V3_URL", default_value = DEFAULT_API_V3_URL, global = true)]
    pub api_v3_url: String,

    /// Public host that normalized server URLs point at
    #[arg(long, env = "MCP_PUBLIC_URL", default_value = DEFAULT_MCP_PUBLIC_URL, global = true)]
    pub mcp_public_url: String,

    /// Log level (DEBUG, INFO, WARNING, ERROR); RUST_LOG takes precedence
    #[arg(long, env = "LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL, global = true)]
    pub log_level: String,

    /// Address the HTTP service listens on
    #[arg(long, env = "MCPBRIDGE_BIND", default_value = DEFAULT_BIND_ADDR, global = true)]
    pub bind: SocketAddr,

    /// Per-request timeout for provider calls, in seconds
    #[arg(
        long,
        env = "MCPBRIDGE_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        global = true
    )]
    pub timeout_secs: u64,
}

impl SettingsArgs {
    /// Build core settings. The API key is checked later, and only by
    /// commands that talk to the provider.
    pub fn to_settings(&self) -> Settings {
        Settings::new(self.api_key.clone().unwrap_or_default())
            .with_api_url(&self.api_url)
            .with_api_v3_url(&self.api_v3_url)
            .with_mcp_public_url(&self.mcp_public_url)
            .with_log_level(&self.log_level)
            .with_bind_addr(self.bind)
            .with_request_timeout(Duration::from_secs(self.timeout_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "mcpbridge",
            "--verbose",
            "--api-key",
            "k-123",
            "--mcp-public-url",
            "https://mcp.example.com",
            "name",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.settings.api_key.as_deref(), Some("k-123"));

        let settings = cli.settings.to_settings();
        assert_eq!(settings.api_key(), "k-123");
        assert_eq!(settings.mcp_public_url(), "https://mcp.example.com");
    }

    #[test]
    fn test_settings_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "mcpbridge",
            "serve",
            "--bind",
            "127.0.0.1:9001",
            "--timeout-secs",
            "5",
        ]);
        let settings = cli.settings.to_settings();
        assert_eq!(settings.bind_addr().port(), 9001);
        assert_eq!(settings.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_bind_is_rejected() {
        assert!(Cli::try_parse_from(["mcpbridge", "--bind", "nowhere", "serve"]).is_err());
    }

    #[test]
    fn test_no_subcommand_is_allowed() {
        let cli = Cli::parse_from(["mcpbridge"]);
        assert!(cli.command.is_none());
    }
}
