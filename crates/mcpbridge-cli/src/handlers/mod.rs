//! Command handlers that delegate to `AppCore`.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<(), CliError>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call `AppCore` methods
//!   3. Format output for the terminal
//!
//! `normalize` and `name` run offline and take no context; `serve` hands the
//! settings to the HTTP adapter.

pub mod connect;
pub mod integration;
pub mod name;
pub mod nanoid;
pub mod normalize;
pub mod provision;
pub mod serve;
