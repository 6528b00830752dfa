//! CRUD operations for one entity collection.
//!
//! Reads are fail-soft: a failed `list` is an empty list and a failed `get`
//! is `None`, so pages render instead of crashing. Mutations never return
//! `Err`; they report through [`ActionResult`].

use ninja_client::{ApiClient, ApiError, Endpoint};
use ninja_core::{ActionResult, EntitySchema, Item};
use serde_json::Value;

use crate::cache::{CacheLookup, ListCache};

/// Operations bound to one entity schema and its endpoint.
#[derive(Debug, Clone)]
pub struct Collection<'a> {
    schema: &'a EntitySchema,
    endpoint: Endpoint,
    client: &'a ApiClient,
    cache: &'a ListCache,
}

impl<'a> Collection<'a> {
    pub(crate) const fn new(
        schema: &'a EntitySchema,
        endpoint: Endpoint,
        client: &'a ApiClient,
        cache: &'a ListCache,
    ) -> Self {
        Self {
            schema,
            endpoint,
            client,
            cache,
        }
    }

    #[must_use]
    pub const fn schema(&self) -> &'a EntitySchema {
        self.schema
    }

    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Every item, in server order. Empty when the backend cannot be reached.
    pub async fn list(&self) -> Vec<Item> {
        self.try_list().await.unwrap_or_else(|e| {
            tracing::warn!(entity = %self.schema.key, error = %e, "list fetch failed; showing no items");
            Vec::new()
        })
    }

    /// Like [`Self::list`] but reports the failure.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body is not a list
    /// of objects.
    pub async fn try_list(&self) -> Result<Vec<Item>, ApiError> {
        if let CacheLookup::Fresh(items) = self.cache.get(&self.schema.key) {
            tracing::debug!(entity = %self.schema.key, count = items.len(), "list served from cache");
            return Ok(items);
        }

        let body = self.client.fetch_json(self.endpoint.collection()).await?;
        let items = parse_items(body)?;
        self.cache.put(&self.schema.key, &items);
        Ok(items)
    }

    /// One item by id, or `None` if it is missing or the fetch failed.
    pub async fn get(&self, id: &str) -> Option<Item> {
        match self.client.fetch_json(&self.endpoint.item(id)).await {
            Ok(Value::Object(map)) => Some(Item::from(map)),
            Ok(other) => {
                tracing::warn!(entity = %self.schema.key, id, body = %other, "item fetch returned a non-object");
                None
            }
            Err(e) => {
                tracing::warn!(entity = %self.schema.key, id, error = %e, "item fetch failed");
                None
            }
        }
    }

    /// Create an item. On success the result carries the server's copy.
    pub async fn create(&self, data: Item) -> ActionResult {
        let body = data.clone().into_value();
        match self.client.post_json(self.endpoint.collection(), &body).await {
            Ok(reply) => {
                let item = saved_item(reply, data);
                self.cache.invalidate(&self.schema.key);
                tracing::info!(entity = %self.schema.key, id = ?item.id(), "item created");
                ActionResult::saved(item)
            }
            Err(e) => self.failure("create", &e),
        }
    }

    /// Replace the fields of an existing item.
    pub async fn update(&self, id: &str, data: Item) -> ActionResult {
        let body = data.clone().into_value();
        match self.client.put_json(&self.endpoint.item(id), &body).await {
            Ok(reply) => {
                let item = saved_item(reply, data.with("id", id));
                self.cache.invalidate(&self.schema.key);
                tracing::info!(entity = %self.schema.key, id, "item updated");
                ActionResult::saved(item)
            }
            Err(e) => self.failure("update", &e),
        }
    }

    pub async fn delete(&self, id: &str) -> ActionResult {
        match self.client.delete_json(&self.endpoint.item(id)).await {
            Ok(_) => {
                self.cache.invalidate(&self.schema.key);
                tracing::info!(entity = %self.schema.key, id, "item deleted");
                ActionResult::done()
            }
            Err(e) => self.failure("delete", &e),
        }
    }

    fn failure(&self, verb: &str, error: &ApiError) -> ActionResult {
        tracing::warn!(entity = %self.schema.key, verb, %error, "mutation failed");
        ActionResult::failed(format!("Failed to {verb} {}: {error}", self.schema.noun()))
    }
}

/// Accepts a bare array or a paginated `{"results": [...]}` envelope.
fn parse_items(body: Value) -> Result<Vec<Item>, ApiError> {
    let rows = match body {
        Value::Array(rows) => rows,
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(rows)) => rows,
            _ => return Err(ApiError::Decode("expected a JSON array of items".into())),
        },
        _ => return Err(ApiError::Decode("expected a JSON array of items".into())),
    };

    rows.into_iter()
        .map(|row| Item::try_from(row).map_err(|row| ApiError::Decode(format!("list entry is not an object: {row}"))))
        .collect()
}

/// The server's copy when it sent one, otherwise what was submitted.
fn saved_item(reply: Value, submitted: Item) -> Item {
    match reply {
        Value::Object(map) => Item::from(map),
        _ => submitted,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_bare_array() {
        let items = parse_items(json!([{"id": 1}, {"id": 2}])).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].id().as_deref(), Some("2"));
    }

    #[test]
    fn parses_paginated_envelope() {
        let items = parse_items(json!({"count": 1, "results": [{"id": "a"}]})).unwrap();
        assert_eq!(items[0].id().as_deref(), Some("a"));
    }

    #[test]
    fn rejects_non_list_bodies() {
        assert!(parse_items(json!({"detail": "nope"})).is_err());
        assert!(parse_items(json!([1, 2])).is_err());
        assert!(parse_items(Value::Null).is_err());
    }

    #[test]
    fn saved_item_prefers_server_copy() {
        let submitted = Item::new().with("phone", "123");
        let item = saved_item(json!({"id": 9, "phone": "123"}), submitted.clone());
        assert_eq!(item.id().as_deref(), Some("9"));
        assert_eq!(saved_item(Value::Null, submitted.clone()), submitted);
    }
}
