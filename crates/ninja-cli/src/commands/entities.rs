use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct EntitySummary<'a> {
    key: &'a str,
    name: &'a str,
    resource: &'a str,
    fields: usize,
}

/// Handle `ncms entities`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let summaries = ctx
        .service
        .registry()
        .iter()
        .map(|schema| EntitySummary {
            key: &schema.key,
            name: &schema.name,
            resource: &schema.resource,
            fields: schema.fields.len(),
        })
        .collect::<Vec<_>>();
    output(&summaries, flags.format)
}
