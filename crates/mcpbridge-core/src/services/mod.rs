//! Core services - the application's business logic layer.
//!
//! Services here are pure orchestrators: they sequence calls on the
//! `ProviderPort` and reshape results, without knowing which concrete
//! adapter sits behind the port.

mod app_core;
mod connection_service;
mod mcp_server_service;

pub use app_core::AppCore;
pub use connection_service::ConnectionService;
pub use mcp_server_service::McpServerService;
