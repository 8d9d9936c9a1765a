//! Nanoid command handler.

use crate::bootstrap::CliContext;
use crate::commands::ShortIdKindArg;
use crate::error::CliError;

/// Execute the nanoid command: resolve and print a short id.
pub async fn execute(ctx: &CliContext, uuid: &str, kind: ShortIdKindArg) -> Result<(), CliError> {
    let info = ctx
        .app()
        .connections()
        .resolve_short_id(uuid, kind.into())
        .await?;
    println!("{}", info.nanoid);
    Ok(())
}
