//! Main commands enum and subcommand argument types.

use clap::{Subcommand, ValueEnum};
use mcpbridge_core::{DEFAULT_TTL, ShortIdKind};

/// Available commands.
///
/// `serve` runs the HTTP service; the rest run one workflow step against the
/// provider (or offline, for `normalize` and `name`) and print the result.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP service
    Serve,

    /// Create an integration for an app and start an OAuth connection
    Connect {
        /// Provider app name (e.g. "gmail")
        app: String,
        /// Use the v1 contract: send default scopes, skip the short-id lookup
        #[arg(long)]
        legacy: bool,
    },

    /// Create an OAuth2 integration without starting a connection
    Integration {
        /// Provider app name
        app: String,
        /// Integration name (defaults to "<app>_integration")
        #[arg(long)]
        name: Option<String>,
    },

    /// Resolve the short id of an integration or connected account
    Nanoid {
        /// Long-form id to resolve
        uuid: String,
        /// Kind of resource the id belongs to
        #[arg(long, value_enum, default_value_t = ShortIdKindArg::AuthConfig)]
        kind: ShortIdKindArg,
    },

    /// Provision a hosted MCP server from a short auth-config id
    Provision {
        /// Short auth-config id (from `connect` or `nanoid`)
        #[arg(long)]
        nanoid: String,
        /// Server lifetime
        #[arg(long, default_value = DEFAULT_TTL)]
        ttl: String,
    },

    /// Rewrite a provider server URL into the public SSE URL (offline)
    Normalize {
        /// Server URL as returned by the provider
        url: String,
    },

    /// Generate a random alphanumeric server name (offline)
    Name {
        /// Number of characters
        #[arg(
            long,
            default_value_t = 7,
            value_parser = clap::value_parser!(u8).range(1..=64)
        )]
        length: u8,
    },
}

/// Command-line spelling of the short-id resource kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShortIdKindArg {
    #[value(name = "AUTH_CONFIG", alias = "auth-config")]
    AuthConfig,
    #[value(name = "CONNECTED_ACCOUNT", alias = "connected-account")]
    ConnectedAccount,
}

impl From<ShortIdKindArg> for ShortIdKind {
    fn from(kind: ShortIdKindArg) -> Self {
        match kind {
            ShortIdKindArg::AuthConfig => Self::AuthConfig,
            ShortIdKindArg::ConnectedAccount => Self::ConnectedAccount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Cli;
    use clap::Parser;
    use mcpbridge_core::DEFAULT_NAME_LENGTH;

    fn parse(args: &[&str]) -> Commands {
        let mut argv = vec!["mcpbridge"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv).command.unwrap()
    }

    #[test]
    fn test_connect_defaults_to_current_contract() {
        match parse(&["connect", "gmail"]) {
            Commands::Connect { app, legacy } => {
                assert_eq!(app, "gmail");
                assert!(!legacy);
            }
            _ => panic!("expected connect"),
        }
        assert!(matches!(
            parse(&["connect", "gmail", "--legacy"]),
            Commands::Connect { legacy: true, .. }
        ));
    }

    #[test]
    fn test_nanoid_kind_spellings() {
        assert!(matches!(
            parse(&["nanoid", "int-1"]),
            Commands::Nanoid {
                kind: ShortIdKindArg::AuthConfig,
                ..
            }
        ));
        assert!(matches!(
            parse(&["nanoid", "ca-1", "--kind", "CONNECTED_ACCOUNT"]),
            Commands::Nanoid {
                kind: ShortIdKindArg::ConnectedAccount,
                ..
            }
        ));
        assert!(matches!(
            parse(&["nanoid", "ca-1", "--kind", "connected-account"]),
            Commands::Nanoid {
                kind: ShortIdKindArg::ConnectedAccount,
                ..
            }
        ));
        assert_eq!(
            ShortIdKind::from(ShortIdKindArg::ConnectedAccount).as_str(),
            "CONNECTED_ACCOUNT"
        );
    }

    #[test]
    fn test_provision_requires_nanoid() {
        assert!(Cli::try_parse_from(["mcpbridge", "provision"]).is_err());
        match parse(&["provision", "--nanoid", "ac_1"]) {
            Commands::Provision { nanoid, ttl } => {
                assert_eq!(nanoid, "ac_1");
                assert_eq!(ttl, DEFAULT_TTL);
            }
            _ => panic!("expected provision"),
        }
    }

    #[test]
    fn test_name_length_bounds() {
        match parse(&["name"]) {
            Commands::Name { length } => assert_eq!(usize::from(length), DEFAULT_NAME_LENGTH),
            _ => panic!("expected name"),
        }
        assert!(Cli::try_parse_from(["mcpbridge", "name", "--length", "0"]).is_err());
        assert!(Cli::try_parse_from(["mcpbridge", "name", "--length", "65"]).is_err());
    }
}
