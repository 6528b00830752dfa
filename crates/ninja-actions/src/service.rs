//! Shared action-layer resources, built once at startup.

use std::sync::Arc;
use std::time::Duration;

use ninja_client::ApiClient;
use ninja_config::NinjaConfig;
use ninja_core::CoreError;
use ninja_schema::{SchemaError, SchemaRegistry};

use crate::cache::ListCache;
use crate::collection::Collection;

/// Entry point of the action layer: API client, schema registry and list
/// cache. Cheap to clone.
#[derive(Debug, Clone)]
pub struct CmsService {
    client: ApiClient,
    registry: Arc<SchemaRegistry>,
    cache: ListCache,
}

impl CmsService {
    /// Build the service from loaded configuration with the built-in schemas.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Other`] if the HTTP client cannot be built.
    pub fn new(config: &NinjaConfig) -> Result<Self, CoreError> {
        let client = ApiClient::new(&config.api)
            .map_err(|e| CoreError::Other(anyhow::Error::new(e).context("failed to build API client")))?;
        Ok(Self::with_parts(
            client,
            Arc::new(SchemaRegistry::builtin()),
            ListCache::new(Duration::from_secs(config.server.cache_ttl_secs)),
        ))
    }

    #[must_use]
    pub const fn with_parts(client: ApiClient, registry: Arc<SchemaRegistry>, cache: ListCache) -> Self {
        Self {
            client,
            registry,
            cache,
        }
    }

    #[must_use]
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    #[must_use]
    pub const fn client(&self) -> &ApiClient {
        &self.client
    }

    #[must_use]
    pub const fn cache(&self) -> &ListCache {
        &self.cache
    }

    /// Operations for one entity, looked up by key or resource slug.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownEntity`] when no schema matches.
    pub fn collection(&self, name: &str) -> Result<Collection<'_>, CoreError> {
        let schema = self.registry.lookup(name).map_err(|e| match e {
            SchemaError::NotFound(key) => CoreError::UnknownEntity(key),
            other => CoreError::Other(other.into()),
        })?;
        Ok(Collection::new(
            schema,
            self.client.endpoint(&schema.resource),
            &self.client,
            &self.cache,
        ))
    }
}
