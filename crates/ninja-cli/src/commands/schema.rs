use anyhow::Context;
use ninja_schema::{entity_json_schema, meta_schemas};
use serde_json::{Map, Value};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ncms schema`.
pub fn handle(args: &SchemaArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if args.meta {
        let documents = meta_schemas()
            .into_iter()
            .map(|(name, schema)| (name.to_string(), schema))
            .collect::<Map<String, Value>>();
        return output(&documents, flags.format);
    }

    let name = args.entity.as_deref().context("an entity is required")?;
    let schema = ctx.service.registry().lookup(name)?;
    if args.json_schema {
        output(&entity_json_schema(schema), flags.format)
    } else {
        output(schema, flags.format)
    }
}
