//! Field type to input control mapping.

use ninja_core::{FieldSchema, FieldType};

/// The input control a field is edited with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    TextBox,
    TextArea,
    NumberBox,
    Checkbox,
    Select,
    ImagePicker,
    RichText,
    DatePicker,
    UrlBox,
    ListEditor,
}

impl Control {
    #[must_use]
    pub const fn for_type(field_type: FieldType) -> Self {
        match field_type {
            FieldType::Text => Self::TextBox,
            FieldType::Textarea => Self::TextArea,
            FieldType::Number => Self::NumberBox,
            FieldType::Boolean => Self::Checkbox,
            FieldType::Select => Self::Select,
            FieldType::Image => Self::ImagePicker,
            FieldType::RichText => Self::RichText,
            FieldType::Date => Self::DatePicker,
            FieldType::Url => Self::UrlBox,
            FieldType::JsonList => Self::ListEditor,
        }
    }

    #[must_use]
    pub const fn for_field(field: &FieldSchema) -> Self {
        Self::for_type(field.field_type)
    }

    /// `type` attribute for controls rendered as `<input>`.
    #[must_use]
    pub const fn input_type(self) -> Option<&'static str> {
        match self {
            Self::TextBox | Self::ImagePicker => Some("text"),
            Self::NumberBox => Some("number"),
            Self::Checkbox => Some("checkbox"),
            Self::DatePicker => Some("date"),
            Self::UrlBox => Some("url"),
            Self::TextArea | Self::Select | Self::RichText | Self::ListEditor => None,
        }
    }
}
