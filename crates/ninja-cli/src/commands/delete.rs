use anyhow::bail;
use ninja_render::{CollectionList, Confirm, DeleteOutcome};
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DeleteArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ncms delete`. Declining the prompt sends nothing.
pub async fn handle(
    args: &DeleteArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
    confirm: &dyn Confirm,
) -> anyhow::Result<()> {
    let collection = ctx.service.collection(&args.entity)?;
    let collection = &collection;
    let mut list = CollectionList::new(collection.schema(), Vec::new(), "");

    let always = |_: &str| true;
    let confirm: &dyn Confirm = if args.yes { &always } else { confirm };
    let outcome = list
        .delete(&args.id, confirm, |id| async move { collection.delete(&id).await })
        .await;

    match outcome {
        DeleteOutcome::Deleted => output(&json!({ "deleted": args.id }), flags.format),
        DeleteOutcome::Declined => {
            if !flags.quiet {
                eprintln!("Cancelled.");
            }
            Ok(())
        }
        DeleteOutcome::Failed(message) => bail!("{message}"),
        DeleteOutcome::Busy => bail!("another delete is still running"),
    }
}
