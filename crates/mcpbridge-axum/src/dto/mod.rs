//! Data Transfer Objects (DTOs) for HTTP API contract.
//!
//! These types define the stable HTTP API contract with explicit serialization
//! control. They decouple internal domain types from external API representation.

pub mod connections;
pub mod mcp_servers;

pub use connections::{ConnectionRequestDto, ConnectionResponseDto};
pub use mcp_servers::{McpServerRequestDto, McpServerResponseDto, ShortIdServerRequestDto};
