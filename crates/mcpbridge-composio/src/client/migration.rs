//! Short-id (nanoid) lookup on the v3 migration endpoint.

use mcpbridge_core::ShortIdKind;

use crate::error::ComposioResult;
use crate::http::HttpBackend;
use crate::models::NanoidResponse;
use crate::url::build_nanoid_url;

use super::ComposioClient;

impl<B: HttpBackend> ComposioClient<B> {
    /// Resolve the short id for a long-form id.
    pub(crate) async fn get_nanoid(
        &self,
        uuid: &str,
        kind: ShortIdKind,
    ) -> ComposioResult<NanoidResponse> {
        let url = build_nanoid_url(&self.config, uuid, kind)?;
        self.backend.get_json(&url).await
    }
}
