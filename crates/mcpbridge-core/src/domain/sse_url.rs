//! Canonical SSE endpoint URLs for provisioned MCP servers.
//!
//! The provider hands back server URLs in several path shapes. Clients want
//! one form:
//!
//! ```text
//! <public-host>/composio/server/{server_id}/sse?useComposioHelperActions=true
//! ```

use url::Url;

use crate::ports::CoreError;

/// Query string every canonical URL carries, replacing whatever was there.
pub const SSE_QUERY: &str = "useComposioHelperActions=true";

/// Rewrite a provider-issued server URL onto `public_base`.
///
/// The server id is the path segment right after the first literal `server`
/// segment (empty segments ignored). Scheme, host and port come from
/// `public_base`; the original query and fragment are discarded.
pub fn normalize_server_url(raw: &str, public_base: &Url) -> Result<Url, CoreError> {
    let malformed = || CoreError::MalformedUpstreamUrl {
        url: raw.to_string(),
    };

    let parsed = Url::parse(raw).map_err(|_| malformed())?;
    let server_id = parsed
        .path_segments()
        .ok_or_else(malformed)?
        .filter(|segment| !segment.is_empty())
        .skip_while(|segment| *segment != "server")
        .nth(1)
        .ok_or_else(malformed)?;

    let mut url = public_base.clone();
    url.set_path(&format!("/composio/server/{server_id}/sse"));
    url.set_query(Some(SSE_QUERY));
    url.set_fragment(None);
    Ok(url)
}
