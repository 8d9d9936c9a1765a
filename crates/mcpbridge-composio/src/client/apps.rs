//! App lookup.

use crate::error::ComposioResult;
use crate::http::HttpBackend;
use crate::models::AppResponse;
use crate::url::build_app_url;

use super::ComposioClient;

impl<B: HttpBackend> ComposioClient<B> {
    /// Fetch an app's metadata, including its auth schemes.
    pub(crate) async fn get_app(&self, app_name: &str) -> ComposioResult<AppResponse> {
        let url = build_app_url(&self.config, app_name)?;
        self.backend.get_json(&url).await
    }
}
