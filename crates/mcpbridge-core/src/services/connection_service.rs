//! Connection service - orchestrates the connect-an-app workflow.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{ConnectionRequest, ConnectionResult, ContractVersion, DEFAULT_ENTITY_ID};
use crate::ports::{
    CoreError, IntegrationInfo, NewIntegration, ProviderPort, ShortIdInfo, ShortIdKind,
};

/// Service for creating integrations and starting connection flows.
pub struct ConnectionService {
    provider: Arc<dyn ProviderPort>,
}

impl ConnectionService {
    /// Create a new connection service.
    pub fn new(provider: Arc<dyn ProviderPort>) -> Self {
        Self { provider }
    }

    /// Run the full connection workflow.
    ///
    /// 1. resolve the app
    /// 2. (v1) read the app's default OAuth scopes, failing before anything
    ///    is created if there are none
    /// 3. create a fresh provider-auth OAuth2 integration
    /// 4. initiate a connection for the default entity
    /// 5. (v3) resolve the integration's short auth-config id
    ///
    /// Any failure aborts the workflow. An integration created in step 3 is
    /// left in place if a later step fails.
    pub async fn create(
        &self,
        request: &ConnectionRequest,
        version: ContractVersion,
    ) -> Result<ConnectionResult, CoreError> {
        request.validate()?;
        let app_name = request.app_name.trim();

        debug!(app = app_name, %version, "Resolving app");
        let app = self.provider.lookup_app(app_name).await?;

        let mut spec = NewIntegration::oauth2(&app.app_id, format!("{app_name}_integration"));
        if version == ContractVersion::V1 {
            let Some(scopes) = app.default_oauth_scopes() else {
                warn!(app = app_name, "App has no default OAuth2 scopes");
                return Err(CoreError::Configuration(format!(
                    "No default scopes found for {app_name}"
                )));
            };
            debug!(app = app_name, scopes = ?scopes, "Using default OAuth2 scopes");
            spec = spec.with_scopes(scopes);
        }

        let integration = self.provider.create_integration(&spec).await?;
        debug!(app = app_name, integration_id = %integration.id, "Integration created");

        let initiation = self
            .provider
            .initiate_connection(&integration.id, DEFAULT_ENTITY_ID)
            .await?;

        let short_id = match version {
            ContractVersion::V1 => None,
            ContractVersion::V3 => Some(
                self.provider
                    .resolve_short_id(&integration.id, ShortIdKind::AuthConfig)
                    .await?
                    .nanoid,
            ),
        };

        info!(
            app = app_name,
            %version,
            integration_id = %integration.id,
            connected_account_id = %initiation.connected_account_id,
            "Connection initiated"
        );

        Ok(ConnectionResult {
            redirect_url: initiation.redirect_url,
            connected_account_id: initiation.connected_account_id,
            integration_id: integration.id,
            short_id,
        })
    }

    /// Create an integration without starting a connection.
    ///
    /// No scopes are sent, so the provider applies its own defaults. `name`
    /// defaults to `{app}_integration`.
    pub async fn create_integration(
        &self,
        app_name: &str,
        name: Option<&str>,
    ) -> Result<IntegrationInfo, CoreError> {
        ConnectionRequest::new(app_name).validate()?;
        let app_name = app_name.trim();
        let app = self.provider.lookup_app(app_name).await?;
        let name = name.map_or_else(|| format!("{app_name}_integration"), String::from);

        let integration = self
            .provider
            .create_integration(&NewIntegration::oauth2(&app.app_id, name))
            .await?;
        info!(app = app_name, integration_id = %integration.id, "Integration created");
        Ok(integration)
    }

    /// Look up the short id for a long-form id.
    pub async fn resolve_short_id(
        &self,
        uuid: &str,
        kind: ShortIdKind,
    ) -> Result<ShortIdInfo, CoreError> {
        if uuid.trim().is_empty() {
            return Err(CoreError::Validation("uuid must not be empty".to_string()));
        }
        Ok(self.provider.resolve_short_id(uuid, kind).await?)
    }
}
