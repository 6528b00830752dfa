use anyhow::bail;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::UpdateArgs;
use crate::commands::shared::assign::{item_for_update, parse_assignments, rejected};
use crate::context::AppContext;
use crate::output::output;

/// Handle `ncms update`. Nothing is sent unless the given fields validate.
pub async fn handle(args: &UpdateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let collection = ctx.service.collection(&args.entity)?;
    let schema = collection.schema();
    let pairs = parse_assignments(schema, &args.assignments)?;
    let item = item_for_update(schema, &pairs).map_err(|errors| rejected(schema, errors))?;

    let result = collection.update(&args.id, item).await;
    if !result.success {
        bail!("{}", result.error_message());
    }
    output(&result.item, flags.format)
}
