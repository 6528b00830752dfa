use anyhow::bail;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CreateArgs;
use crate::commands::shared::assign::{item_for_create, parse_assignments, rejected};
use crate::context::AppContext;
use crate::output::output;

/// Handle `ncms create`. Nothing is sent unless the item validates.
pub async fn handle(args: &CreateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let collection = ctx.service.collection(&args.entity)?;
    let schema = collection.schema();
    if !schema.creatable() {
        bail!("{} items arrive from the public site and cannot be created here", schema.name);
    }
    let pairs = parse_assignments(schema, &args.assignments)?;
    let item = item_for_create(schema, &pairs).map_err(|errors| rejected(schema, errors))?;

    let result = collection.create(item).await;
    if !result.success {
        bail!("{}", result.error_message());
    }
    output(&result.item, flags.format)
}
