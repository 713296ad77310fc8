//! In-memory listing cache with a fixed TTL.
//!
//! Cache-aside: callers hand [`ListingCache::get_or_compute`] the key
//! and the query closure; a fresh entry short-circuits the query, a
//! missing or expired one runs it and stores the result. Entries hold
//! the serialized JSON payload, so one cache serves every listing
//! shape. Cache trouble never fails a request: entries that do not
//! decode are evicted and recomputed, and results that do not encode
//! are served uncached.

use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use lru::LruCache;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;

struct Entry {
    stored_at: Instant,
    payload: Vec<u8>,
}

/// Shared handle for cached listing responses.
pub struct ListingCache {
    inner: RwLock<LruCache<String, Entry>>,
    ttl: Duration,
}

impl ListingCache {
    /// A cache holding at most `capacity` entries, each valid for `ttl`
    /// after being stored. Expiry is lazy: stale entries linger until
    /// read or pushed out by capacity.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        ListingCache {
            inner: RwLock::new(LruCache::new(capacity)),
            ttl,
        }
    }

    /// Return the cached value under `key`, or run `compute`, store its
    /// result, and return it.
    pub async fn get_or_compute<T, F, Fut>(&self, key: &str, compute: F) -> Result<Vec<T>, sqlx::Error>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = Result<Vec<T>, sqlx::Error>>,
    {
        {
            let mut cache = self.inner.write().await;
            if let Some(entry) = cache.get(key) {
                if entry.stored_at.elapsed() < self.ttl {
                    match serde_json::from_slice::<Vec<T>>(&entry.payload) {
                        Ok(value) => return Ok(value),
                        Err(err) => {
                            tracing::warn!(key, error = %err, "evicting undecodable cache entry");
                            cache.pop(key);
                        }
                    }
                } else {
                    cache.pop(key);
                }
            }
        }

        let value = compute().await?;

        match serde_json::to_vec(&value) {
            Ok(payload) => {
                let mut cache = self.inner.write().await;
                cache.put(
                    key.to_string(),
                    Entry {
                        stored_at: Instant::now(),
                        payload,
                    },
                );
            }
            Err(err) => {
                tracing::warn!(key, error = %err, "skipping cache store for unencodable value");
            }
        }

        Ok(value)
    }

    /// Drop one entry, if present.
    pub async fn invalidate(&self, key: &str) {
        self.inner.write().await.pop(key);
    }

    /// Drop every entry.
    pub async fn clear(&self) {
        self.inner.write().await.clear();
    }

    /// Number of live entries, counting stale ones not yet evicted.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Whether the cache currently holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    async fn count_up(counter: &AtomicUsize) -> Result<Vec<u32>, sqlx::Error> {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(vec![1, 2, 3])
    }

    #[tokio::test]
    async fn second_read_hits_cache() {
        let cache = ListingCache::new(8, Duration::from_secs(60));
        let calls = AtomicUsize::new(0);

        let first: Vec<u32> = cache.get_or_compute("event:all", || count_up(&calls)).await.unwrap();
        let second: Vec<u32> = cache.get_or_compute("event:all", || count_up(&calls)).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn expired_entry_is_recomputed() {
        let cache = ListingCache::new(8, Duration::from_millis(0));
        let calls = AtomicUsize::new(0);

        let _: Vec<u32> = cache.get_or_compute("event:all", || count_up(&calls)).await.unwrap();
        let _: Vec<u32> = cache.get_or_compute("event:all", || count_up(&calls)).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn keys_are_independent() {
        let cache = ListingCache::new(8, Duration::from_secs(60));
        let calls = AtomicUsize::new(0);

        let _: Vec<u32> = cache.get_or_compute("camp:all", || count_up(&calls)).await.unwrap();
        let _: Vec<u32> = cache.get_or_compute("camp:year=2012", || count_up(&calls)).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(cache.len().await, 2);
    }

    #[tokio::test]
    async fn invalidate_forces_recompute() {
        let cache = ListingCache::new(8, Duration::from_secs(60));
        let calls = AtomicUsize::new(0);

        let _: Vec<u32> = cache.get_or_compute("art:all", || count_up(&calls)).await.unwrap();
        cache.invalidate("art:all").await;
        let _: Vec<u32> = cache.get_or_compute("art:all", || count_up(&calls)).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn query_error_is_not_cached() {
        let cache = ListingCache::new(8, Duration::from_secs(60));
        let calls = AtomicUsize::new(0);

        let failed: Result<Vec<u32>, _> = cache
            .get_or_compute("year:all", || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(sqlx::Error::RowNotFound)
            })
            .await;
        assert!(failed.is_err());
        assert!(cache.is_empty().await);

        let ok: Vec<u32> = cache.get_or_compute("year:all", || count_up(&calls)).await.unwrap();
        assert_eq!(ok, vec![1, 2, 3]);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
