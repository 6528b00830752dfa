//! Server-owned records.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An opaque record whose shape conforms to an [`EntitySchema`].
///
/// The CMS never owns persistence: an `Item` is a transient view of server
/// state, identified by a server-assigned `id`.
///
/// [`EntitySchema`]: crate::EntitySchema
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Item(Map<String, Value>);

impl Item {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The server-assigned id, whether the backend sent a string or a number.
    #[must_use]
    pub fn id(&self) -> Option<String> {
        match self.0.get("id")? {
            Value::String(id) if !id.is_empty() => Some(id.clone()),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// String view of a field, for display. `null`/absent become `None`.
    #[must_use]
    pub fn text(&self, field: &str) -> Option<String> {
        match self.0.get(field)? {
            Value::Null => None,
            Value::String(value) => Some(value.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn insert(&mut self, field: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(field.into(), value)
    }

    #[must_use]
    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.0.insert(field.to_string(), value.into());
        self
    }

    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.remove(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Whether every field of `other` is present here with an equal value.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        other
            .fields()
            .all(|(key, value)| self.0.get(key) == Some(value))
    }
}

impl From<Map<String, Value>> for Item {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Item {
    type Error = Value;

    /// Accepts only JSON objects; any other value is handed back.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn id_accepts_strings_and_numbers() {
        let numeric = Item::try_from(json!({"id": 42, "title": "x"})).unwrap();
        assert_eq!(numeric.id().as_deref(), Some("42"));

        let uuid = Item::try_from(json!({"id": "a1b2"})).unwrap();
        assert_eq!(uuid.id().as_deref(), Some("a1b2"));

        let blank = Item::try_from(json!({"id": ""})).unwrap();
        assert_eq!(blank.id(), None);
        assert_eq!(Item::new().id(), None);
    }

    #[test]
    fn non_objects_are_rejected() {
        assert!(Item::try_from(json!([1, 2])).is_err());
    }

    #[test]
    fn serializes_transparently() {
        let item = Item::new().with("phone", "123").with("active", true);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json, json!({"phone": "123", "active": true}));
    }

    #[test]
    fn contains_checks_subset() {
        let stored = Item::new().with("id", 1).with("phone", "123").with("email", "a@b.com");
        let submitted = Item::new().with("phone", "123");
        assert!(stored.contains(&submitted));
        assert!(!stored.contains(&Item::new().with("phone", "999")));
    }

    #[test]
    fn text_renders_scalars() {
        let item = Item::new().with("price", 499).with("note", serde_json::Value::Null);
        assert_eq!(item.text("price").as_deref(), Some("499"));
        assert_eq!(item.text("note"), None);
        assert_eq!(item.text("missing"), None);
    }
}
