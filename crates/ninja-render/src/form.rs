//! Headless form state for creating and editing one item.
//!
//! Holds the raw text of every control, per-field errors and the submitting
//! flag. Submission runs coercion and validation first; the save handler is
//! only called when both pass.

use std::collections::HashMap;
use std::future::Future;

use ninja_core::{ActionResult, EntitySchema, FieldType, Item};
use ninja_schema::{CoerceMode, ValidationErrors, coerce, validate};
use serde_json::Value;

/// Banner shown when submission is blocked by field errors.
pub const FIX_ERRORS: &str = "Please fix the errors in the form";

/// Name of the hidden input carrying a form's single-use submit token.
pub const TOKEN_FIELD: &str = "_token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

/// What happened to one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission is already in flight; nothing was done.
    Busy,
    /// Input failed validation; the handler was not called.
    Blocked(ValidationErrors),
    /// Saved; navigate to `redirect`.
    Saved { item: Item, redirect: String },
    /// The handler reported failure; values are kept for another try.
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct FormState {
    schema: EntitySchema,
    mode: FormMode,
    values: HashMap<String, String>,
    errors: ValidationErrors,
    submitting: bool,
    banner: Option<String>,
    back_url: Option<String>,
    list_path: String,
    token: Option<String>,
}

impl FormState {
    /// Empty form with every field at its default value.
    #[must_use]
    pub fn create(schema: &EntitySchema) -> Self {
        Self::build(schema, FormMode::Create, None)
    }

    /// Form pre-filled from an existing item.
    #[must_use]
    pub fn edit(schema: &EntitySchema, id: &str, item: &Item) -> Self {
        Self::build(schema, FormMode::Edit { id: id.to_string() }, Some(item))
    }

    /// Form re-filled from a posted payload. Unchecked checkboxes are absent
    /// from a post, so missing booleans read as `false`.
    #[must_use]
    pub fn from_post(schema: &EntitySchema, mode: FormMode, pairs: &[(String, String)]) -> Self {
        let mut form = Self::build(schema, mode, None);
        for field in &schema.fields {
            if field.field_type == FieldType::Boolean {
                form.values.insert(field.name.clone(), "false".into());
            }
        }
        for (name, value) in pairs {
            if schema.field_named(name).is_some() {
                form.values.insert(name.clone(), value.clone());
            }
        }
        form
    }

    fn build(schema: &EntitySchema, mode: FormMode, item: Option<&Item>) -> Self {
        let values = schema
            .fields
            .iter()
            .map(|field| {
                let value = item
                    .and_then(|item| item.get(&field.name))
                    .filter(|value| !value.is_null())
                    .or(field.default_value.as_ref());
                let raw = value.map_or_else(String::new, |value| raw_text(field.field_type, value));
                (field.name.clone(), raw)
            })
            .collect();

        Self {
            list_path: format!("/admin/cms/{}", schema.resource),
            schema: schema.clone(),
            mode,
            values,
            errors: ValidationErrors::new(),
            submitting: false,
            banner: None,
            back_url: None,
            token: None,
        }
    }

    /// Where to go after a successful save instead of the list page.
    #[must_use]
    pub fn with_back_url(mut self, url: impl Into<String>) -> Self {
        self.back_url = Some(url.into());
        self
    }

    /// Submit token rendered into the form as a hidden input.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn with_list_path(mut self, path: impl Into<String>) -> Self {
        self.list_path = path.into();
        self
    }

    #[must_use]
    pub const fn schema(&self) -> &EntitySchema {
        &self.schema
    }

    #[must_use]
    pub const fn mode(&self) -> &FormMode {
        &self.mode
    }

    #[must_use]
    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map_or("", String::as_str)
    }

    /// Change one value. Clears that field's error.
    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(field.to_string(), value.into());
        self.errors.remove(field);
    }

    #[must_use]
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }

    #[must_use]
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    #[must_use]
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Mark a submission as in flight (e.g. while a page is re-rendered).
    pub const fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    #[must_use]
    pub fn back_url(&self) -> Option<&str> {
        self.back_url.as_deref()
    }

    #[must_use]
    pub fn list_path(&self) -> &str {
        &self.list_path
    }

    /// Coerce and validate the current values without submitting.
    ///
    /// # Errors
    ///
    /// Returns the field errors that would block submission.
    pub fn check(&self) -> Result<Item, ValidationErrors> {
        let pairs: Vec<(String, String)> = self
            .schema
            .fields
            .iter()
            .map(|field| (field.name.clone(), self.value(&field.name).to_string()))
            .collect();
        let item = coerce(&self.schema, &pairs, CoerceMode::Form)?;
        validate(&self.schema, &item).map_err(ValidationErrors::from_schema_error)?;
        Ok(item)
    }

    /// Validate, then hand the typed item to `handler` and record the result.
    pub async fn submit<F, Fut>(&mut self, handler: F) -> SubmitOutcome
    where
        F: FnOnce(Item) -> Fut,
        Fut: Future<Output = ActionResult>,
    {
        if self.submitting {
            return SubmitOutcome::Busy;
        }

        let item = match self.check() {
            Ok(item) => item,
            Err(errors) => {
                tracing::debug!(entity = %self.schema.key, count = errors.len(), "submit blocked by validation");
                self.banner = Some(errors.general().unwrap_or(FIX_ERRORS).to_string());
                self.errors = errors.clone();
                return SubmitOutcome::Blocked(errors);
            }
        };

        self.errors = ValidationErrors::new();
        self.banner = None;
        self.submitting = true;
        let result = handler(item.clone()).await;
        self.submitting = false;

        if result.success {
            SubmitOutcome::Saved {
                item: result.item.unwrap_or(item),
                redirect: self.back_url.clone().unwrap_or_else(|| self.list_path.clone()),
            }
        } else {
            let message = result.error_message().to_string();
            self.banner = Some(message.clone());
            SubmitOutcome::Failed(message)
        }
    }
}

/// Text shown in a control for a stored value.
fn raw_text(field_type: FieldType, value: &Value) -> String {
    match (field_type, value) {
        (_, Value::String(text)) => text.clone(),
        (FieldType::JsonList, Value::Array(items)) => {
            let lines: Option<Vec<&str>> = items.iter().map(Value::as_str).collect();
            match lines {
                Some(lines) if lines.iter().all(|line| reads_back_as_line(line)) => lines.join("\n"),
                _ => serde_json::to_string_pretty(value).unwrap_or_default(),
            }
        }
        (_, other) => other.to_string(),
    }
}

/// Whether a list entry survives the one-entry-per-line text form unchanged.
fn reads_back_as_line(entry: &str) -> bool {
    !entry.is_empty() && entry.trim() == entry && !entry.contains(['\n', '\r']) && !entry.starts_with('[')
}
