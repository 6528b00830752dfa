//! In-process cache of list results, keyed by entity.
//!
//! A successful mutation of an entity invalidates that entity's entry only.
//! Failed fetches are never stored.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use ninja_core::Item;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheLookup {
    Miss,
    Fresh(Vec<Item>),
}

#[derive(Debug)]
struct Entry {
    items: Vec<Item>,
    fetched_at: Instant,
}

/// Shared, clonable list cache. A zero TTL disables caching.
#[derive(Debug, Clone)]
pub struct ListCache {
    entries: Arc<Mutex<HashMap<String, Entry>>>,
    ttl: Duration,
}

impl ListCache {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    /// A cache that never holds anything.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn get(&self, entity: &str) -> CacheLookup {
        let mut entries = self.lock();
        let fresh = entries
            .get(entity)
            .is_some_and(|entry| entry.fetched_at.elapsed() < self.ttl);
        if fresh {
            return entries
                .get(entity)
                .map_or(CacheLookup::Miss, |entry| CacheLookup::Fresh(entry.items.clone()));
        }
        entries.remove(entity);
        CacheLookup::Miss
    }

    pub fn put(&self, entity: &str, items: &[Item]) {
        if self.ttl.is_zero() {
            return;
        }
        self.lock().insert(
            entity.to_string(),
            Entry {
                items: items.to_vec(),
                fetched_at: Instant::now(),
            },
        );
    }

    /// Drop the cached list of one entity.
    pub fn invalidate(&self, entity: &str) {
        if self.lock().remove(entity).is_some() {
            tracing::debug!(entity, "list cache invalidated");
        }
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn items() -> Vec<Item> {
        vec![Item::new().with("id", 1), Item::new().with("id", 2)]
    }

    #[test]
    fn put_then_get_is_fresh() {
        let cache = ListCache::new(Duration::from_secs(60));
        cache.put("faq", &items());
        assert_eq!(cache.get("faq"), CacheLookup::Fresh(items()));
        assert_eq!(cache.get("gallery_item"), CacheLookup::Miss);
    }

    #[test]
    fn invalidation_is_scoped_to_one_entity() {
        let cache = ListCache::new(Duration::from_secs(60));
        cache.put("faq", &items());
        cache.put("stat_card", &items());
        cache.invalidate("faq");
        assert_eq!(cache.get("faq"), CacheLookup::Miss);
        assert_eq!(cache.get("stat_card"), CacheLookup::Fresh(items()));
    }

    #[test]
    fn expired_entries_miss() {
        let cache = ListCache::new(Duration::from_millis(1));
        cache.put("faq", &items());
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(cache.get("faq"), CacheLookup::Miss);
    }

    #[test]
    fn zero_ttl_never_stores() {
        let cache = ListCache::disabled();
        cache.put("faq", &items());
        assert_eq!(cache.get("faq"), CacheLookup::Miss);
    }

    #[test]
    fn clear_drops_everything() {
        let cache = ListCache::new(Duration::from_secs(60));
        cache.put("faq", &items());
        cache.clear();
        assert_eq!(cache.get("faq"), CacheLookup::Miss);
    }
}
