//! Process-wide, best-effort memoization with per-entry TTL.
//!
//! The backing map is keyed by string and stores type-erased values; entries
//! expire lazily on the next read of their key. There is no periodic sweep —
//! the operative key set is bounded (configuration plus taxonomy keys), so
//! expired-but-unread entries are acceptable until their key is touched.

pub mod keys;
mod lock;

use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::config::CacheConfig;
use lock::{rw_read, rw_write};

const SOURCE: &str = "cache";

struct CacheEntry {
    value: Arc<dyn Any + Send + Sync>,
    inserted_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    fn is_expired(&self) -> bool {
        self.inserted_at.elapsed() > self.ttl
    }
}

/// In-memory TTL cache shared by all request handlers of one process.
///
/// Explicitly constructed and passed in (no global singleton) so tests and
/// the two frontends each own an isolated instance. None of its operations
/// fail; only the producer passed to [`CacheManager::get_or_set`] can.
pub struct CacheManager {
    entries: RwLock<HashMap<String, CacheEntry>>,
    default_ttl: Duration,
}

impl CacheManager {
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            default_ttl: config.default_ttl,
        }
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Returns the stored value if present, unexpired, and of type `T`.
    /// An expired entry is evicted and reported as absent; a type mismatch
    /// is treated as absent without eviction.
    pub fn get<T>(&self, key: &str) -> Option<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        let mut entries = rw_write(&self.entries, SOURCE, "get");
        match entries.get(key) {
            Some(entry) if !entry.is_expired() => entry
                .value
                .clone()
                .downcast::<T>()
                .ok()
                .map(|value| (*value).clone()),
            Some(_) => {
                entries.remove(key);
                trace!(key, "evicted expired cache entry");
                None
            }
            None => None,
        }
    }

    /// Unconditionally overwrites `key` with the default TTL.
    pub fn set<T>(&self, key: &str, value: T)
    where
        T: Send + Sync + 'static,
    {
        self.set_with_ttl(key, value, self.default_ttl);
    }

    pub fn set_with_ttl<T>(&self, key: &str, value: T, ttl: Duration)
    where
        T: Send + Sync + 'static,
    {
        let mut entries = rw_write(&self.entries, SOURCE, "set");
        entries.insert(
            key.to_string(),
            CacheEntry {
                value: Arc::new(value),
                inserted_at: Instant::now(),
                ttl,
            },
        );
    }

    /// Cached value on a valid hit, otherwise the producer's result, stored
    /// under the default TTL. A failing producer caches nothing and its
    /// error propagates untouched.
    ///
    /// Two concurrent misses on one key both invoke the producer; the later
    /// result silently overwrites. Producers here are idempotent GETs, so no
    /// single-flight collapsing is done.
    pub async fn get_or_set<T, E, F, Fut>(&self, key: &str, producer: F) -> Result<T, E>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.get_or_set_with_ttl(key, self.default_ttl, producer)
            .await
    }

    pub async fn get_or_set_with_ttl<T, E, F, Fut>(
        &self,
        key: &str,
        ttl: Duration,
        producer: F,
    ) -> Result<T, E>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(hit) = self.get::<T>(key) {
            debug!(key, "cache hit");
            return Ok(hit);
        }
        debug!(key, "cache miss");
        let value = producer().await?;
        self.set_with_ttl(key, value.clone(), ttl);
        Ok(value)
    }

    /// Removes `key`; true when an entry (expired or not) was present.
    pub fn remove(&self, key: &str) -> bool {
        let mut entries = rw_write(&self.entries, SOURCE, "remove");
        entries.remove(key).is_some()
    }

    /// Removes every key starting with `prefix`, leaving others untouched.
    pub fn remove_by_prefix(&self, prefix: &str) {
        let mut entries = rw_write(&self.entries, SOURCE, "remove_by_prefix");
        entries.retain(|key, _| !key.starts_with(prefix));
    }

    pub fn clear(&self) {
        let mut entries = rw_write(&self.entries, SOURCE, "clear");
        entries.clear();
    }

    /// Existence check with the same expiry semantics as [`CacheManager::get`].
    pub fn has(&self, key: &str) -> bool {
        let mut entries = rw_write(&self.entries, SOURCE, "has");
        match entries.get(key) {
            Some(entry) if !entry.is_expired() => true,
            Some(_) => {
                entries.remove(key);
                false
            }
            None => false,
        }
    }

    /// Raw entry count, expired entries included.
    pub fn len(&self) -> usize {
        rw_read(&self.entries, SOURCE, "len").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn cache_with_ttl(ttl: Duration) -> CacheManager {
        CacheManager::new(&CacheConfig { default_ttl: ttl })
    }

    #[test]
    fn set_then_get_within_ttl_returns_value() {
        let cache = cache_with_ttl(Duration::from_secs(60));
        cache.set("k", 42_u64);
        assert_eq!(cache.get::<u64>("k"), Some(42));
        assert!(cache.has("k"));
    }

    #[test]
    fn expired_entry_is_absent_and_evicted() {
        let cache = cache_with_ttl(Duration::from_secs(60));
        cache.set_with_ttl("k", 42_u64, Duration::ZERO);
        std::thread::sleep(Duration::from_millis(5));

        assert_eq!(cache.get::<u64>("k"), None);
        assert!(!cache.has("k"));
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn set_overwrites_existing_entry() {
        let cache = cache_with_ttl(Duration::from_secs(60));
        cache.set("k", "old".to_string());
        cache.set("k", "new".to_string());
        assert_eq!(cache.get::<String>("k"), Some("new".to_string()));
    }

    #[test]
    fn type_mismatch_reads_as_absent() {
        let cache = cache_with_ttl(Duration::from_secs(60));
        cache.set("k", 1_u64);
        assert_eq!(cache.get::<String>("k"), None);
        // the entry itself survives for the correct type
        assert_eq!(cache.get::<u64>("k"), Some(1));
    }

    #[test]
    fn remove_by_prefix_leaves_other_keys() {
        let cache = cache_with_ttl(Duration::from_secs(60));
        cache.set("a:1", 1_u64);
        cache.set("a:2", 2_u64);
        cache.set("b:1", 3_u64);

        cache.remove_by_prefix("a:");

        assert_eq!(cache.get::<u64>("a:1"), None);
        assert_eq!(cache.get::<u64>("a:2"), None);
        assert_eq!(cache.get::<u64>("b:1"), Some(3));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn get_or_set_skips_producer_on_hit() {
        let cache = cache_with_ttl(Duration::from_secs(60));
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let value: Result<u64, std::convert::Infallible> = cache
                .get_or_set("k", || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(7)
                })
                .await;
            assert_eq!(value.expect("infallible"), 7);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn get_or_set_caches_nothing_on_failure() {
        let cache = cache_with_ttl(Duration::from_secs(60));

        let result: Result<u64, &str> = cache.get_or_set("k", || async { Err("boom") }).await;
        assert_eq!(result, Err("boom"));
        assert!(!cache.has("k"));

        // a later producer still runs and its value sticks
        let result: Result<u64, &str> = cache.get_or_set("k", || async { Ok(9) }).await;
        assert_eq!(result, Ok(9));
        assert_eq!(cache.get::<u64>("k"), Some(9));
    }

    #[tokio::test]
    async fn get_or_set_refetches_after_expiry() {
        let cache = cache_with_ttl(Duration::from_secs(60));
        let calls = AtomicUsize::new(0);

        let produce = || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok::<u64, std::convert::Infallible>(1)
        };

        cache
            .get_or_set_with_ttl("k", Duration::ZERO, produce)
            .await
            .expect("infallible");
        std::thread::sleep(Duration::from_millis(5));
        cache
            .get_or_set_with_ttl("k", Duration::ZERO, produce)
            .await
            .expect("infallible");

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn clear_empties_the_map() {
        let cache = cache_with_ttl(Duration::from_secs(60));
        cache.set("a", 1_u64);
        cache.set("b", 2_u64);
        cache.clear();
        assert!(cache.is_empty());
    }
}
