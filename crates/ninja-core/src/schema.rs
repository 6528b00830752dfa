//! Declarative field and entity schemas.
//!
//! Every managed collection (FAQs, pricing plans, gallery photos, ...) is
//! described by one [`EntitySchema`]: an ordered list of [`FieldSchema`]s plus
//! display metadata. Forms, lists, validation and the action layer are all
//! driven from the same definition so they never drift apart.

use std::collections::HashSet;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// FieldType
// ---------------------------------------------------------------------------

/// Input kind of a field. Selects the form control and the list cell style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Textarea,
    Number,
    Boolean,
    Select,
    Image,
    #[serde(alias = "richtext")]
    RichText,
    Date,
    Url,
    JsonList,
}

impl FieldType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Select => "select",
            Self::Image => "image",
            Self::RichText => "rich_text",
            Self::Date => "date",
            Self::Url => "url",
            Self::JsonList => "json_list",
        }
    }

    /// Whether values of this type are plain strings on the wire.
    #[must_use]
    pub const fn is_textual(self) -> bool {
        matches!(
            self,
            Self::Text
                | Self::Textarea
                | Self::Select
                | Self::Image
                | Self::RichText
                | Self::Date
                | Self::Url
        )
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FieldSchema
// ---------------------------------------------------------------------------

/// One `{value, label}` choice of a `select` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Declared constraints checked client-side before any network call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Constraints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl Constraints {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.min_length.is_none()
            && self.max_length.is_none()
            && self.min.is_none()
            && self.max.is_none()
            && self.pattern.is_none()
    }
}

/// A single field of an entity schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FieldSchema {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<Constraints>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub read_only: bool,
}

impl FieldSchema {
    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            field_type,
            required: false,
            options: Vec::new(),
            validation: None,
            default_value: None,
            help_text: None,
            placeholder: None,
            read_only: false,
        }
    }

    #[must_use]
    pub fn text(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldType::Text)
    }

    #[must_use]
    pub fn textarea(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldType::Textarea)
    }

    #[must_use]
    pub fn number(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldType::Number)
    }

    #[must_use]
    pub fn boolean(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldType::Boolean)
    }

    #[must_use]
    pub fn select(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldType::Select)
    }

    #[must_use]
    pub fn image(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldType::Image)
    }

    #[must_use]
    pub fn rich_text(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldType::RichText)
    }

    #[must_use]
    pub fn date(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldType::Date)
    }

    #[must_use]
    pub fn url(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldType::Url)
    }

    #[must_use]
    pub fn json_list(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldType::JsonList)
    }

    /// The conventional `active` toggle, on by default.
    #[must_use]
    pub fn active() -> Self {
        Self::boolean("active", "Active").default_value(Value::Bool(true))
    }

    /// The conventional `order` sort key, zero by default.
    #[must_use]
    pub fn order() -> Self {
        Self::number("order", "Order").default_value(Value::from(0))
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    #[must_use]
    pub fn option(mut self, value: &str, label: &str) -> Self {
        self.options.push(SelectOption {
            value: value.to_string(),
            label: label.to_string(),
        });
        self
    }

    #[must_use]
    pub fn default_value(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    #[must_use]
    pub fn help(mut self, text: &str) -> Self {
        self.help_text = Some(text.to_string());
        self
    }

    #[must_use]
    pub fn placeholder(mut self, text: &str) -> Self {
        self.placeholder = Some(text.to_string());
        self
    }

    #[must_use]
    pub fn min_length(mut self, min: u32) -> Self {
        self.constraints_mut().min_length = Some(min);
        self
    }

    #[must_use]
    pub fn max_length(mut self, max: u32) -> Self {
        self.constraints_mut().max_length = Some(max);
        self
    }

    #[must_use]
    pub fn range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        let constraints = self.constraints_mut();
        constraints.min = min;
        constraints.max = max;
        self
    }

    #[must_use]
    pub fn pattern(mut self, pattern: &str) -> Self {
        self.constraints_mut().pattern = Some(pattern.to_string());
        self
    }

    fn constraints_mut(&mut self) -> &mut Constraints {
        self.validation.get_or_insert_with(Constraints::default)
    }

    /// Whether `value` is one of the declared select options.
    #[must_use]
    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|option| option.value == value)
    }
}

// ---------------------------------------------------------------------------
// EntitySchema
// ---------------------------------------------------------------------------

/// Number of columns the list view shows when none are declared.
const DEFAULT_LIST_COLUMNS: usize = 5;

/// The full description of one managed entity kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EntitySchema {
    /// Registry key, e.g. `contact_info`.
    pub key: String,
    /// Human display name, e.g. `Contact Info`.
    pub name: String,
    /// URL slug of the backend resource and admin route, e.g. `contact-info`.
    pub resource: String,
    pub fields: Vec<FieldSchema>,
    /// Explicit list columns. Empty means "first five listable fields".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub list_columns: Vec<String>,
    /// Items arrive from the public site. The admin reads, updates and
    /// deletes them but never creates them.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub inbox: bool,
}

impl EntitySchema {
    #[must_use]
    pub fn new(key: &str, name: &str, resource: &str) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            resource: resource.to_string(),
            fields: Vec::new(),
            list_columns: Vec::new(),
            inbox: false,
        }
    }

    #[must_use]
    pub fn field(mut self, field: FieldSchema) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn columns(mut self, columns: &[&str]) -> Self {
        self.list_columns = columns.iter().map(ToString::to_string).collect();
        self
    }

    #[must_use]
    pub const fn inbox(mut self) -> Self {
        self.inbox = true;
        self
    }

    /// Whether the admin may create new items of this kind.
    #[must_use]
    pub const fn creatable(&self) -> bool {
        !self.inbox
    }

    #[must_use]
    pub fn field_named(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Fields shown as list columns, in display order.
    #[must_use]
    pub fn list_fields(&self) -> Vec<&FieldSchema> {
        if self.list_columns.is_empty() {
            return self
                .fields
                .iter()
                .filter(|field| {
                    !matches!(field.field_type, FieldType::JsonList | FieldType::RichText)
                })
                .take(DEFAULT_LIST_COLUMNS)
                .collect();
        }

        self.list_columns
            .iter()
            .filter_map(|column| self.field_named(column))
            .collect()
    }

    /// First field name that appears more than once, if any.
    #[must_use]
    pub fn duplicate_field(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.fields
            .iter()
            .map(|field| field.name.as_str())
            .find(|name| !seen.insert(*name))
    }

    /// Declared list columns that do not name a field.
    #[must_use]
    pub fn undeclared_columns(&self) -> Vec<&str> {
        self.list_columns
            .iter()
            .map(String::as_str)
            .filter(|column| self.field_named(column).is_none())
            .collect()
    }

    /// Lower-cased display name for user-facing messages.
    #[must_use]
    pub fn noun(&self) -> String {
        self.name.to_lowercase()
    }
}
