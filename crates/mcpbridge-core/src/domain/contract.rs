//! Versioned HTTP/API contract selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which generation of the workflow contract a request follows.
///
/// The two generations track the provider's own API versions:
///
/// - `V1`: connections carry the app's default OAuth scopes and return the
///   raw connected-account id; servers are provisioned from explicit app and
///   account lists and the provider URL is returned unmodified.
/// - `V3`: connections skip the scope lookup and return a short auth-config
///   id; servers are provisioned from that short id and the URL is normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractVersion {
    V1,
    #[default]
    V3,
}

impl ContractVersion {
    /// Path segment used when mounting routes (`v1`, `v3`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V3 => "v3",
        }
    }
}

impl fmt::Display for ContractVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "v1" | "1" | "legacy" => Ok(Self::V1),
            "v3" | "3" | "current" => Ok(Self::V3),
            other => Err(format!("unknown contract version '{other}'")),
        }
    }
}
