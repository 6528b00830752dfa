//! JSON Schema export of entity definitions.

use ninja_core::{ActionResult, EntitySchema, FieldSchema, FieldType, Item};
use serde_json::{Map, Value, json};

/// JSON Schema (draft 2020-12) describing the wire shape of one entity.
#[must_use]
pub fn entity_json_schema(schema: &EntitySchema) -> Value {
    let required: Vec<&str> = schema
        .fields
        .iter()
        .filter(|field| field.required)
        .map(|field| field.name.as_str())
        .collect();

    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": schema.name,
        "type": "object",
        "properties": properties(schema, true),
        "required": required,
    })
}

/// Schemas for the shared types every entity is built from.
#[must_use]
pub fn meta_schemas() -> Vec<(&'static str, Value)> {
    vec![
        ("entity_schema", schemars::schema_for!(EntitySchema).to_value()),
        ("field_schema", schemars::schema_for!(FieldSchema).to_value()),
        ("item", schemars::schema_for!(Item).to_value()),
        ("action_result", schemars::schema_for!(ActionResult).to_value()),
    ]
}

/// Constraint-only schema used by validation: no `required` list and no
/// annotations, since blank handling is done by hand.
pub(crate) fn constraint_schema(schema: &EntitySchema) -> Value {
    json!({
        "type": "object",
        "properties": properties(schema, false),
    })
}

fn properties(schema: &EntitySchema, annotate: bool) -> Map<String, Value> {
    schema
        .fields
        .iter()
        .map(|field| (field.name.clone(), property(field, annotate)))
        .collect()
}

fn property(field: &FieldSchema, annotate: bool) -> Value {
    let mut out = Map::new();
    let kind = match field.field_type {
        FieldType::Number => "number",
        FieldType::Boolean => "boolean",
        FieldType::JsonList => "array",
        _ => "string",
    };
    out.insert("type".into(), json!(kind));

    if field.field_type == FieldType::Select && !field.options.is_empty() {
        let values: Vec<&str> = field.options.iter().map(|option| option.value.as_str()).collect();
        out.insert("enum".into(), json!(values));
    }

    if let Some(rules) = &field.validation {
        let (min_key, max_key) = if field.field_type == FieldType::JsonList {
            ("minItems", "maxItems")
        } else {
            ("minLength", "maxLength")
        };
        if let Some(min) = rules.min_length {
            out.insert(min_key.into(), json!(min));
        }
        if let Some(max) = rules.max_length {
            out.insert(max_key.into(), json!(max));
        }
        if let Some(min) = rules.min {
            out.insert("minimum".into(), json!(min));
        }
        if let Some(max) = rules.max {
            out.insert("maximum".into(), json!(max));
        }
        if let Some(pattern) = &rules.pattern {
            out.insert("pattern".into(), json!(pattern));
        }
    }

    if annotate {
        out.insert("title".into(), json!(field.label));
        if let Some(help) = &field.help_text {
            out.insert("description".into(), json!(help));
        }
        if let Some(default) = &field.default_value {
            out.insert("default".into(), default.clone());
        }
        if field.read_only {
            out.insert("readOnly".into(), json!(true));
        }
        if field.field_type == FieldType::Date {
            out.insert("format".into(), json!("date"));
        }
    }

    Value::Object(out)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::SchemaRegistry;

    #[test]
    fn contact_info_export_lists_required_and_types() {
        let registry = SchemaRegistry::builtin();
        let doc = entity_json_schema(registry.get("contact_info").unwrap());

        assert_eq!(doc["title"], "Contact Info");
        assert_eq!(doc["required"], json!(["phone"]));
        assert_eq!(doc["properties"]["phone"]["type"], "string");
        assert_eq!(doc["properties"]["active"]["type"], "boolean");
        assert_eq!(doc["properties"]["active"]["default"], true);
        assert_eq!(doc["properties"]["order"]["type"], "number");
    }

    #[test]
    fn select_and_bounds_are_exported() {
        let registry = SchemaRegistry::builtin();
        let doc = entity_json_schema(registry.get("pricing_plan").unwrap());

        assert_eq!(doc["properties"]["type"]["enum"], json!(["SESSION", "PARTY"]));
        assert_eq!(doc["properties"]["duration"]["minimum"], json!(1.0));
        assert_eq!(doc["properties"]["duration"]["maximum"], json!(1440.0));
        assert_eq!(doc["properties"]["features"]["type"], "array");
    }

    #[test]
    fn every_exported_schema_compiles() {
        let registry = SchemaRegistry::builtin();
        for schema in registry.iter() {
            let doc = entity_json_schema(schema);
            assert!(
                jsonschema::validator_for(&doc).is_ok(),
                "{} does not compile",
                schema.key
            );
        }
    }

    #[test]
    fn meta_schemas_are_objects() {
        let metas = meta_schemas();
        assert_eq!(metas.len(), 4);
        for (name, doc) in metas {
            assert!(doc.is_object(), "{name} is not an object");
        }
    }
}
