#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// Allow private types in public type alias - DefaultComposioClient is meant to be
// used through the ProviderPort trait, not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultComposioClient;

// Configuration
pub use config::ComposioClientConfig;

// Construction errors
pub use error::ComposioError;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
#[cfg(test)]
use wiremock as _;
