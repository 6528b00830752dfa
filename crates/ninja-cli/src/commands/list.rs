use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::context::AppContext;
use crate::output::output_items;

/// Handle `ncms list`. Unlike the fail-soft action, an unreachable backend
/// is an error here.
pub async fn handle(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let collection = ctx.service.collection(&args.entity)?;
    let items = collection
        .try_list()
        .await
        .with_context(|| format!("failed to list {}", collection.schema().noun()))?;
    output_items(collection.schema(), &items, flags.format, &ctx.media_base())
}
