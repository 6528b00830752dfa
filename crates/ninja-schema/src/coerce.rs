//! Conversion of raw string input (form posts, `--set key=value`) into typed
//! items.

use ninja_core::{EntitySchema, FieldSchema, FieldType, Item};
use serde_json::{Number, Value};

use crate::validation::ValidationErrors;

/// How absent keys are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoerceMode {
    /// A full HTML form post: an unchecked checkbox is absent from the
    /// payload and means `false`.
    Form,
    /// A partial update: only the supplied keys are set.
    Partial,
}

/// Build an item from raw key/value pairs according to the schema.
///
/// Keys that do not name a declared field are dropped. When a key repeats,
/// the last value wins.
///
/// # Errors
///
/// Returns every value that cannot be converted to its field's type.
pub fn coerce(
    schema: &EntitySchema,
    raw: &[(String, String)],
    mode: CoerceMode,
) -> Result<Item, ValidationErrors> {
    let mut item = Item::new();
    let mut errors = ValidationErrors::new();

    for (key, text) in raw {
        let Some(field) = schema.field_named(key) else {
            continue;
        };
        match coerce_value(field, text) {
            Ok(value) => {
                errors.remove(&field.name);
                item.insert(field.name.clone(), value);
            }
            Err(message) => {
                item.remove(&field.name);
                errors.push(&field.name, message);
            }
        }
    }

    if mode == CoerceMode::Form {
        for field in &schema.fields {
            let unset = item.get(&field.name).is_none() && errors.get(&field.name).is_none();
            if field.field_type == FieldType::Boolean && unset {
                item.insert(field.name.clone(), Value::Bool(false));
            }
        }
    }

    errors.into_result().map(|()| item)
}

fn coerce_value(field: &FieldSchema, text: &str) -> Result<Value, String> {
    match field.field_type {
        FieldType::Number => parse_number(text.trim())
            .ok_or_else(|| format!("{} must be a number", field.label)),
        FieldType::Boolean => parse_bool(text.trim())
            .map(Value::Bool)
            .ok_or_else(|| format!("{} must be true or false", field.label)),
        FieldType::JsonList => Ok(parse_list(text)),
        FieldType::Date | FieldType::Url | FieldType::Select => Ok(Value::String(text.trim().to_string())),
        FieldType::Text | FieldType::Textarea | FieldType::Image | FieldType::RichText => {
            Ok(Value::String(text.to_string()))
        }
    }
}

/// Empty input is `null`; integers stay integers.
fn parse_number(text: &str) -> Option<Value> {
    if text.is_empty() {
        return Some(Value::Null);
    }
    if let Ok(int) = text.parse::<i64>() {
        return Some(Value::from(int));
    }
    text.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.to_ascii_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Some(true),
        "" | "off" | "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// A JSON array, or plain text with one string entry per non-empty line.
///
/// Text that starts with `[` but is not a JSON array is read as lines, so an
/// entry like `[VIP] lounge access` stays a string.
fn parse_list(text: &str) -> Value {
    let trimmed = text.trim();
    if trimmed.starts_with('[') {
        if let Ok(values) = serde_json::from_str::<Vec<Value>>(trimmed) {
            return Value::Array(values);
        }
    }
    let entries = trimmed
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| Value::String(line.to_string()))
        .collect();
    Value::Array(entries)
}
