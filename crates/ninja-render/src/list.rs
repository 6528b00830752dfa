//! Headless list state: columns, display cells, and the delete flow.

use std::future::Future;

use ninja_core::{ActionResult, EntitySchema, FieldSchema, FieldType, Item};

use crate::media::media_url;

/// Question asked before any delete.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this item?";

/// Text of the empty-table row.
pub const EMPTY_MESSAGE: &str = "No items found. Create one to get started.";

/// Longest textarea excerpt shown in a cell.
const EXCERPT_CHARS: usize = 50;

/// Asks the operator to confirm a destructive action.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// One rendered table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Thumbnail; `src` is empty when the item has no image.
    Image { src: String },
    /// `Active`/`Inactive` pill for booleans.
    Badge { on: bool },
    /// Plain text, with the full value kept for a tooltip.
    Text { text: String, title: String },
}

impl Cell {
    #[must_use]
    pub const fn badge_label(on: bool) -> &'static str {
        if on { "Active" } else { "Inactive" }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: Option<String>,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The operator said no; nothing was sent.
    Declined,
    /// The row is gone.
    Deleted,
    /// The row stays; the message is shown inline.
    Failed(String),
    /// Another delete is still running.
    Busy,
}

#[derive(Debug, Clone)]
pub struct CollectionList {
    schema: EntitySchema,
    items: Vec<Item>,
    base_path: String,
    media_base: String,
    error: Option<String>,
    deleting: Option<String>,
}

impl CollectionList {
    /// Items are kept in the order the server returned them.
    #[must_use]
    pub fn new(schema: &EntitySchema, items: Vec<Item>, base_path: impl Into<String>) -> Self {
        Self {
            schema: schema.clone(),
            items,
            base_path: base_path.into().trim_end_matches('/').to_string(),
            media_base: String::new(),
            error: None,
            deleting: None,
        }
    }

    /// Host that relative image paths are resolved against.
    #[must_use]
    pub fn with_media_base(mut self, media_base: impl Into<String>) -> Self {
        self.media_base = media_base.into();
        self
    }

    #[must_use]
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Treat a delete of `id` as already in flight.
    #[must_use]
    pub fn with_pending_delete(mut self, id: impl Into<String>) -> Self {
        self.deleting = Some(id.into());
        self
    }

    #[must_use]
    pub const fn schema(&self) -> &EntitySchema {
        &self.schema
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    #[must_use]
    pub fn columns(&self) -> Vec<&FieldSchema> {
        self.schema.list_fields()
    }

    #[must_use]
    pub fn rows(&self) -> Vec<Row> {
        let columns = self.columns();
        self.items
            .iter()
            .map(|item| Row {
                id: item.id(),
                cells: columns.iter().map(|field| self.cell(field, item)).collect(),
            })
            .collect()
    }

    #[must_use]
    pub fn new_href(&self) -> String {
        format!("{}/new", self.base_path)
    }

    /// Ids are percent-encoded as one path segment.
    #[must_use]
    pub fn edit_href(&self, id: &str) -> String {
        format!("{}/{}/edit", self.base_path, urlencoding::encode(id))
    }

    #[must_use]
    pub fn delete_href(&self, id: &str) -> String {
        format!("{}/{}/delete", self.base_path, urlencoding::encode(id))
    }

    /// Confirm, then delete one row through `handler`.
    ///
    /// The row is removed only when the handler reports success. A failure
    /// keeps the row and sets the inline error.
    pub async fn delete<C, F, Fut>(&mut self, id: &str, confirm: &C, handler: F) -> DeleteOutcome
    where
        C: Confirm + ?Sized,
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = ActionResult>,
    {
        if self.deleting.is_some() {
            return DeleteOutcome::Busy;
        }
        if !confirm.confirm(DELETE_PROMPT) {
            return DeleteOutcome::Declined;
        }

        self.deleting = Some(id.to_string());
        let result = handler(id.to_string()).await;
        self.deleting = None;

        if result.success {
            self.items.retain(|item| item.id().as_deref() != Some(id));
            self.error = None;
            DeleteOutcome::Deleted
        } else {
            let message = result
                .error
                .unwrap_or_else(|| "Failed to delete item".to_string());
            self.error = Some(message.clone());
            DeleteOutcome::Failed(message)
        }
    }

    fn cell(&self, field: &FieldSchema, item: &Item) -> Cell {
        match field.field_type {
            FieldType::Image => Cell::Image {
                src: media_url(&self.media_base, &item.text(&field.name).unwrap_or_default()),
            },
            FieldType::Boolean => Cell::Badge {
                on: item.get(&field.name).is_some_and(truthy),
            },
            FieldType::Textarea => {
                let full = item.text(&field.name).unwrap_or_default();
                Cell::Text {
                    text: excerpt(&full, EXCERPT_CHARS),
                    title: full,
                }
            }
            _ => {
                let full = item.text(&field.name).unwrap_or_default();
                Cell::Text {
                    text: full.clone(),
                    title: full,
                }
            }
        }
    }
}

fn truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Bool(on) => *on,
        serde_json::Value::Null => false,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        serde_json::Value::String(s) => !s.is_empty() && s != "false",
        _ => true,
    }
}

fn excerpt(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{cut}...")
}
