use anyhow::bail;
use ninja_core::{EntitySchema, Item};
use ninja_schema::{CoerceMode, ValidationErrors, coerce, validate};

/// Split `--set field=value` arguments, rejecting fields the entity lacks.
pub fn parse_assignments(schema: &EntitySchema, raw: &[String]) -> anyhow::Result<Vec<(String, String)>> {
    raw.iter()
        .map(|assignment| {
            let Some((field, value)) = assignment.split_once('=') else {
                bail!("invalid assignment '{assignment}': expected FIELD=VALUE");
            };
            let field = field.trim();
            if schema.field_named(field).is_none() {
                bail!("unknown field '{field}' for {}", schema.name);
            }
            Ok((field.to_string(), value.to_string()))
        })
        .collect()
}

/// Typed item for a create. Fields not given take their schema default.
pub fn item_for_create(schema: &EntitySchema, pairs: &[(String, String)]) -> Result<Item, ValidationErrors> {
    let mut item = coerce(schema, pairs, CoerceMode::Partial)?;
    for field in &schema.fields {
        if item.get(&field.name).is_none() {
            if let Some(default) = &field.default_value {
                item.insert(field.name.clone(), default.clone());
            }
        }
    }
    check(schema, &item)?;
    Ok(item)
}

/// Typed item for an update. Only the given fields are checked and sent.
pub fn item_for_update(schema: &EntitySchema, pairs: &[(String, String)]) -> Result<Item, ValidationErrors> {
    let item = coerce(schema, pairs, CoerceMode::Partial)?;
    match check(schema, &item) {
        Ok(()) => Ok(item),
        Err(mut errors) => {
            for field in &schema.fields {
                if !item.as_map().contains_key(&field.name) {
                    errors.remove(&field.name);
                }
            }
            if errors.is_empty() { Ok(item) } else { Err(errors) }
        }
    }
}

fn check(schema: &EntitySchema, item: &Item) -> Result<(), ValidationErrors> {
    validate(schema, item).map_err(ValidationErrors::from_schema_error)
}

/// Turn field errors into the command's failure, one line per field.
pub fn rejected(schema: &EntitySchema, errors: ValidationErrors) -> anyhow::Error {
    if let Some(general) = errors.general() {
        let message = format!("{} was not saved: {general}", schema.noun());
        return anyhow::Error::new(errors).context(message);
    }
    let lines = errors
        .iter()
        .map(|error| format!("  {}: {}", error.field, error.message))
        .collect::<Vec<_>>()
        .join("\n");
    anyhow::Error::new(errors).context(format!("{} was not saved; fix these fields:\n{lines}", schema.noun()))
}
