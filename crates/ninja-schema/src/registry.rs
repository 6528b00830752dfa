//! Central schema registry for every managed entity kind.
//!
//! The `SchemaRegistry` is built once at startup from the built-in catalog
//! and is read-only afterwards. Pages, renderers and the action layer all look
//! schemas up here so field definitions are never duplicated.

use std::collections::HashMap;

use ninja_core::EntitySchema;

use crate::catalog;
use crate::error::SchemaError;

/// Immutable store of entity schemas, in registration order.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    schemas: Vec<EntitySchema>,
    by_key: HashMap<String, usize>,
}

impl SchemaRegistry {
    /// Build the registry containing every entity the admin manages.
    ///
    /// # Panics
    ///
    /// Panics if the built-in catalog violates a registry invariant
    /// (duplicate keys, duplicate field names, undeclared list columns). The
    /// catalog is static, so this is covered by the registry tests.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_schemas(catalog::all()).expect("built-in schema catalog is valid")
    }

    /// Build a registry from arbitrary schemas, checking invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Invalid`] if two schemas share a key or
    /// resource, a schema repeats a field name, or a list column does not
    /// name a declared field.
    pub fn from_schemas(schemas: Vec<EntitySchema>) -> Result<Self, SchemaError> {
        let mut by_key = HashMap::with_capacity(schemas.len());
        let mut resources = HashMap::with_capacity(schemas.len());

        for (index, schema) in schemas.iter().enumerate() {
            if by_key.insert(schema.key.clone(), index).is_some() {
                return Err(invalid(schema, "entity key registered twice".into()));
            }
            if resources.insert(schema.resource.clone(), index).is_some() {
                return Err(invalid(schema, format!("resource '{}' registered twice", schema.resource)));
            }
            if let Some(name) = schema.duplicate_field() {
                return Err(invalid(schema, format!("field '{name}' declared twice")));
            }
            let undeclared = schema.undeclared_columns();
            if !undeclared.is_empty() {
                return Err(invalid(
                    schema,
                    format!("list columns name unknown fields: {}", undeclared.join(", ")),
                ));
            }
        }

        Ok(Self { schemas, by_key })
    }

    /// Get a schema by entity key.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::NotFound`] for unknown keys.
    pub fn get(&self, key: &str) -> Result<&EntitySchema, SchemaError> {
        self.by_key
            .get(key)
            .map(|index| &self.schemas[*index])
            .ok_or_else(|| SchemaError::NotFound(key.to_string()))
    }

    /// Resolve a user-supplied name: entity key (`contact_info`), resource
    /// slug (`contact-info`) or hyphenated key.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::NotFound`] when nothing matches.
    pub fn lookup(&self, name: &str) -> Result<&EntitySchema, SchemaError> {
        let normalized = name.trim().replace('-', "_");
        if let Ok(schema) = self.get(&normalized) {
            return Ok(schema);
        }
        self.by_resource(name.trim())
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))
    }

    /// Get a schema by its URL resource slug.
    #[must_use]
    pub fn by_resource(&self, resource: &str) -> Option<&EntitySchema> {
        self.schemas.iter().find(|schema| schema.resource == resource)
    }

    /// All entity keys, in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.schemas.iter().map(|schema| schema.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntitySchema> {
        self.schemas.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn invalid(schema: &EntitySchema, reason: String) -> SchemaError {
    SchemaError::Invalid {
        entity: schema.key.clone(),
        reason,
    }
}
