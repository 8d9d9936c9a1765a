//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (HTTP framework, provider wire format).
//!
//! # Structure
//!
//! - `contract` - Versioned API contract selector
//! - `connection` - Connection workflow request/result types
//! - `server` - MCP server provisioning request/result types
//! - `naming` - Random display-name generator
//! - `sse_url` - Provider URL to canonical SSE endpoint normalizer

mod connection;
mod contract;
mod naming;
mod server;
mod sse_url;

pub use connection::{ConnectionRequest, ConnectionResult, DEFAULT_ENTITY_ID};
pub use contract::ContractVersion;
pub use naming::{DEFAULT_NAME_LENGTH, generate_name, generate_name_with_length};
pub use server::{
    CustomServerSpec, DEFAULT_TTL, ServerProvisionRequest, ServerProvisionResult,
    ShortIdServerSpec,
};
pub use sse_url::{SSE_QUERY, normalize_server_url};
