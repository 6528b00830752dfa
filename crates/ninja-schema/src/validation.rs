//! Client-side validation of items against their entity schema.
//!
//! Runs entirely before any network call. A required field is missing when
//! it is absent, `null`, a blank string or an empty list; `0` and `false`
//! count as present. Declared constraints (length, bounds, pattern, select
//! options) are checked only for values that are present.

use std::fmt;

use chrono::NaiveDate;
use ninja_core::{EntitySchema, FieldSchema, FieldType, Item};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::SchemaError;
use crate::export::constraint_schema;

/// One failed check, attached to a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Field errors in schema order, at most one message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error. The first message for a field wins.
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        if self.get(field).is_none() {
            self.errors.push(FieldError {
                field: field.to_string(),
                message: message.into(),
            });
        }
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }

    pub fn remove(&mut self, field: &str) {
        self.errors.retain(|error| error.field != field);
    }

    pub fn merge(&mut self, other: Self) {
        for error in other.errors {
            self.push(&error.field, error.message);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record a problem that belongs to no single field.
    pub fn push_general(&mut self, message: impl Into<String>) {
        self.push("", message);
    }

    /// The error that belongs to no single field, if any.
    #[must_use]
    pub fn general(&self) -> Option<&str> {
        self.get("")
    }

    /// Field errors from a [`validate`] failure; any other schema failure
    /// becomes the general error.
    #[must_use]
    pub fn from_schema_error(error: SchemaError) -> Self {
        match error {
            SchemaError::Validation(errors) => errors,
            other => {
                let mut errors = Self::new();
                errors.push_general(other.to_string());
                errors
            }
        }
    }

    pub(crate) fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self
            .errors
            .iter()
            .map(|error| error.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "validation failed: {summary}")
    }
}

impl std::error::Error for ValidationErrors {}

/// Whether a value counts as "not filled in".
#[must_use]
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Validate an item against its schema.
///
/// # Errors
///
/// Returns [`SchemaError::Validation`] listing every failing field, or
/// [`SchemaError::Generation`] if a declared constraint (e.g. a `pattern`)
/// cannot be compiled.
pub fn validate(schema: &EntitySchema, item: &Item) -> Result<(), SchemaError> {
    let mut errors = ValidationErrors::new();
    let mut present = Map::new();

    for field in &schema.fields {
        match item.get(&field.name) {
            Some(value) if !is_blank(value) => {
                check_format(field, value, &mut errors);
                present.insert(field.name.clone(), value.clone());
            }
            _ if field.required => errors.push(&field.name, format!("{} is required", field.label)),
            _ => {}
        }
    }

    check_constraints(schema, &Value::Object(present), &mut errors)?;
    errors.into_result().map_err(SchemaError::from)
}

/// Checks that are clearer by hand than as JSON Schema messages.
fn check_format(field: &FieldSchema, value: &Value, errors: &mut ValidationErrors) {
    match field.field_type {
        FieldType::Date => {
            let valid = value
                .as_str()
                .is_some_and(|text| NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").is_ok());
            if !valid {
                errors.push(&field.name, format!("{} must be a date (YYYY-MM-DD)", field.label));
            }
        }
        FieldType::Url => {
            let valid = value.as_str().is_some_and(|text| {
                let text = text.trim();
                text.starts_with("http://") || text.starts_with("https://") || text.starts_with('/')
            });
            if !valid {
                errors.push(&field.name, format!("{} must be a URL", field.label));
            }
        }
        FieldType::Select => {
            let valid = value.as_str().is_some_and(|text| field.has_option(text));
            if !valid {
                let choices = field
                    .options
                    .iter()
                    .map(|option| option.value.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                errors.push(&field.name, format!("{} must be one of: {choices}", field.label));
            }
        }
        FieldType::Number => {
            if !value.is_number() {
                errors.push(&field.name, format!("{} must be a number", field.label));
            }
        }
        _ => {}
    }
}

fn check_constraints(
    schema: &EntitySchema,
    present: &Value,
    errors: &mut ValidationErrors,
) -> Result<(), SchemaError> {
    let document = constraint_schema(schema);
    let validator = jsonschema::validator_for(&document)
        .map_err(|e| SchemaError::Generation(format!("{}: {e}", schema.key)))?;

    for error in validator.iter_errors(present) {
        let path = error.instance_path.to_string();
        let name = path.trim_start_matches('/');
        let Some(field) = schema.field_named(name) else {
            continue;
        };
        errors.push(&field.name, format!("{} is invalid: {error}", field.label));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::SchemaRegistry;

    fn item(value: Value) -> Item {
        Item::try_from(value).expect("object")
    }

    fn errors_of(schema: &EntitySchema, value: Value) -> ValidationErrors {
        match validate(schema, &item(value)) {
            Err(SchemaError::Validation(errors)) => errors,
            other => panic!("expected validation errors, got {other:?}"),
        }
    }

    #[test]
    fn blank_values() {
        assert!(is_blank(&Value::Null));
        assert!(is_blank(&json!("   ")));
        assert!(is_blank(&json!([])));
        assert!(!is_blank(&json!(0)));
        assert!(!is_blank(&json!(false)));
        assert!(!is_blank(&json!("x")));
    }

    #[test]
    fn empty_required_phone_is_rejected() {
        let registry = SchemaRegistry::builtin();
        let schema = registry.get("contact_info").unwrap();
        let errors = errors_of(schema, json!({"phone": "", "email": "a@b.com", "address": "X"}));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("phone"), Some("Phone is required"));
    }

    #[test]
    fn complete_contact_info_passes() {
        let registry = SchemaRegistry::builtin();
        let schema = registry.get("contact_info").unwrap();
        let result = validate(
            schema,
            &item(json!({"phone": "123", "email": "a@b.com", "address": "X"})),
        );
        assert!(result.is_ok(), "{result:?}");
    }

    #[test]
    fn zero_and_false_satisfy_required() {
        let schema = EntitySchema::new("t", "T", "ts")
            .field(FieldSchema::number("count", "Count").required())
            .field(FieldSchema::boolean("flag", "Flag").required());
        assert!(validate(&schema, &item(json!({"count": 0, "flag": false}))).is_ok());
    }

    #[test]
    fn pattern_is_enforced_for_present_values_only() {
        let registry = SchemaRegistry::builtin();
        let schema = registry.get("contact_info").unwrap();

        let errors = errors_of(schema, json!({"phone": "123", "email": "not-an-email"}));
        assert!(errors.get("email").is_some_and(|msg| msg.starts_with("Email is invalid")));

        assert!(validate(schema, &item(json!({"phone": "123", "email": ""}))).is_ok());
    }

    #[test]
    fn max_length_and_numeric_bounds() {
        let registry = SchemaRegistry::builtin();
        let faq = registry.get("faq").unwrap();
        let long_question = "q".repeat(300);
        let errors = errors_of(faq, json!({"question": long_question, "answer": "a"}));
        assert!(errors.get("question").is_some());

        let plan = registry.get("pricing_plan").unwrap();
        let errors = errors_of(
            plan,
            json!({"name": "Jump", "type": "SESSION", "price": -5, "duration": 60}),
        );
        assert!(errors.get("price").is_some());
        assert!(errors.get("duration").is_none());
    }

    #[test]
    fn select_value_must_be_an_option() {
        let registry = SchemaRegistry::builtin();
        let plan = registry.get("pricing_plan").unwrap();
        let errors = errors_of(
            plan,
            json!({"name": "Jump", "type": "WEEKLY", "price": 5, "duration": 60}),
        );
        assert_eq!(errors.get("type"), Some("Type must be one of: SESSION, PARTY"));
    }

    #[test]
    fn date_and_number_formats() {
        let registry = SchemaRegistry::builtin();
        let doc = registry.get("legal_document").unwrap();
        let errors = errors_of(
            doc,
            json!({"document_type": "TERMS", "title": "T", "effective_date": "31/12/2024"}),
        );
        assert!(errors.get("effective_date").is_some());
        assert!(
            validate(
                doc,
                &item(json!({"document_type": "TERMS", "title": "T", "effective_date": "2024-12-31"}))
            )
            .is_ok()
        );

        let plan = registry.get("pricing_plan").unwrap();
        let errors = errors_of(
            plan,
            json!({"name": "Jump", "type": "SESSION", "price": "cheap", "duration": 60}),
        );
        assert_eq!(errors.get("price"), Some("Price must be a number"));
    }

    #[test]
    fn uncompilable_constraint_is_a_general_error() {
        let schema = EntitySchema::new("coupon", "Coupon", "coupons")
            .field(FieldSchema::text("code", "Code").required().pattern("("));
        let item = Item::new().with("code", "JUMP10");

        let error = validate(&schema, &item).unwrap_err();
        assert!(matches!(error, SchemaError::Generation(_)));

        let errors = ValidationErrors::from_schema_error(error);
        assert_eq!(errors.len(), 1);
        assert!(errors.general().is_some_and(|m| m.starts_with("Schema generation error: coupon")));
        assert_eq!(errors.get("code"), None);
    }

    #[test]
    fn every_builtin_schema_compiles() {
        let registry = SchemaRegistry::builtin();
        for schema in registry.iter() {
            let result = validate(schema, &Item::new());
            assert!(
                !matches!(result, Err(SchemaError::Generation(_))),
                "{} failed to compile: {result:?}",
                schema.key
            );
        }
    }

    #[test]
    fn errors_keep_first_message_per_field() {
        let mut errors = ValidationErrors::new();
        errors.push("phone", "first");
        errors.push("phone", "second");
        assert_eq!(errors.get("phone"), Some("first"));
        errors.remove("phone");
        assert!(errors.is_empty());
    }
}
