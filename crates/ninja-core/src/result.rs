//! The uniform contract returned by every mutating action.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::Item;

/// Outcome of a create/update/delete call.
///
/// Mutating actions never raise: transport and HTTP failures are folded into
/// `success: false` with a human-readable `error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ActionResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<Item>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ActionResult {
    /// Successful create/update carrying the server's representation.
    #[must_use]
    pub const fn saved(item: Item) -> Self {
        Self {
            success: true,
            item: Some(item),
            error: None,
        }
    }

    /// Successful call with no item to report (delete).
    #[must_use]
    pub const fn done() -> Self {
        Self {
            success: true,
            item: None,
            error: None,
        }
    }

    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            item: None,
            error: Some(error.into()),
        }
    }

    /// Error message, falling back to a generic one for bare failures.
    #[must_use]
    pub fn error_message(&self) -> &str {
        self.error.as_deref().unwrap_or("Failed to save")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn absent_fields_are_omitted() {
        let json = serde_json::to_value(ActionResult::done()).unwrap();
        assert_eq!(json, json!({"success": true}));

        let json = serde_json::to_value(ActionResult::failed("boom")).unwrap();
        assert_eq!(json, json!({"success": false, "error": "boom"}));
    }

    #[test]
    fn saved_carries_item() {
        let result = ActionResult::saved(Item::new().with("phone", "123"));
        assert!(result.success);
        assert_eq!(
            result.item.and_then(|item| item.text("phone")).as_deref(),
            Some("123")
        );
    }

    #[test]
    fn error_message_has_fallback() {
        let bare = ActionResult {
            success: false,
            item: None,
            error: None,
        };
        assert_eq!(bare.error_message(), "Failed to save");
        assert_eq!(ActionResult::failed("nope").error_message(), "nope");
    }
}
