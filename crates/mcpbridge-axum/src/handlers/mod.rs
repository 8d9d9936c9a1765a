//! HTTP handlers.
//!
//! Handlers are thin: extract, call one core service, map the result.

pub mod connections;
pub mod mcp_servers;
