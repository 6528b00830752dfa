use anyhow::bail;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GetArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ncms get`.
pub async fn handle(args: &GetArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let collection = ctx.service.collection(&args.entity)?;
    let Some(item) = collection.get(&args.id).await else {
        bail!("{} '{}' not found", collection.schema().noun(), args.id);
    };
    output(&item, flags.format)
}
