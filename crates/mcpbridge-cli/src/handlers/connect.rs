//! Connect command handler.
//!
//! Runs the full connection workflow and prints where the user should go to
//! authorize.

use mcpbridge_core::{ConnectionRequest, ConnectionResult, ContractVersion};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the connect command.
///
/// # Arguments
///
/// * `ctx` - The CLI context providing access to `AppCore`
/// * `app` - Provider app name
/// * `legacy` - Follow the v1 contract (default scopes, no short id)
pub async fn execute(ctx: &CliContext, app: &str, legacy: bool) -> Result<(), CliError> {
    let version = if legacy {
        ContractVersion::V1
    } else {
        ContractVersion::V3
    };
    tracing::debug!(app, %version, "Starting connection from CLI");

    let result = ctx
        .app()
        .connections()
        .create(&ConnectionRequest::new(app), version)
        .await?;

    println!("{}", render(&result));
    Ok(())
}

fn render(result: &ConnectionResult) -> String {
    let mut out = format!(
        "Connection initiated.\n\n  Redirect URL:          {}\n  Connected account id:  {}\n  Integration id:        {}",
        result.redirect_url, result.connected_account_id, result.integration_id
    );
    if let Some(short_id) = &result.short_id {
        out.push_str(&format!("\n  Auth config nanoid:    {short_id}"));
        out.push_str(&format!(
            "\n\nProvision a server with:\n  mcpbridge provision --nanoid {short_id}"
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::context_with;
    use mcpbridge_core::{
        AppInfo, AuthField, AuthScheme, ConnectionInitiation, IntegrationInfo, MockProviderPort,
        ShortIdInfo,
    };

    fn app_without_scopes() -> AppInfo {
        AppInfo {
            app_id: "app-uuid-gmail".to_string(),
            key: "gmail".to_string(),
            name: "Gmail".to_string(),
            auth_schemes: vec![AuthScheme {
                mode: "OAUTH2".to_string(),
                fields: vec![AuthField {
                    name: "scopes".to_string(),
                    default: None,
                }],
            }],
        }
    }

    #[tokio::test]
    async fn test_connect_runs_current_workflow() {
        let mut provider = MockProviderPort::new();
        provider
            .expect_lookup_app()
            .returning(|_| Ok(app_without_scopes()));
        provider
            .expect_create_integration()
            .withf(|spec| spec.scopes.is_none())
            .returning(|_| {
                Ok(IntegrationInfo {
                    id: "int-1".to_string(),
                    app_id: "app-uuid-gmail".to_string(),
                    app_name: "gmail".to_string(),
                })
            });
        provider.expect_initiate_connection().returning(|_, _| {
            Ok(ConnectionInitiation {
                redirect_url: "https://accounts.example/auth".to_string(),
                connected_account_id: "ca-1".to_string(),
                status: None,
            })
        });
        provider.expect_resolve_short_id().times(1).returning(|_, _| {
            Ok(ShortIdInfo {
                nanoid: "ac_1".to_string(),
            })
        });

        execute(&context_with(provider), "gmail", false)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_legacy_connect_without_scopes_is_config_error() {
        let mut provider = MockProviderPort::new();
        provider
            .expect_lookup_app()
            .returning(|_| Ok(app_without_scopes()));
        provider.expect_create_integration().never();

        let err = execute(&context_with(provider), "gmail", true)
            .await
            .unwrap_err();
        assert_eq!(err.exit_code(), 78);
        assert!(err.to_string().contains("No default scopes found for gmail"));
    }

    #[tokio::test]
    async fn test_blank_app_is_usage_error() {
        let err = execute(&context_with(MockProviderPort::new()), "  ", false)
            .await
            .unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_render_mentions_nanoid_only_when_present() {
        let mut result = ConnectionResult {
            redirect_url: "https://accounts.example/auth".to_string(),
            connected_account_id: "ca-1".to_string(),
            integration_id: "int-1".to_string(),
            short_id: None,
        };
        assert!(!render(&result).contains("nanoid"));

        result.short_id = Some("ac_1".to_string());
        let out = render(&result);
        assert!(out.contains("https://accounts.example/auth"));
        assert!(out.contains("--nanoid ac_1"));
    }
}
