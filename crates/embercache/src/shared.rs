//! Lock-protected shared wrapper around the cache

use std::hash::Hash;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::cache::EmberCache;
use crate::entry::Entry;
use crate::error::Error;
use crate::stats::CacheStats;

/// Internally synchronized cache handle
///
/// Wraps an [`EmberCache`] in `Arc<Mutex<..>>` for use from multiple
/// threads; cloning the handle shares the same cache. Reads clone the value
/// out rather than borrowing across the lock.
///
/// This is a separate component from the core store, which is
/// single-threaded on its own. The wrapped cache is dropped (and therefore
/// flushed) when the last handle goes away.
pub struct SharedCache<K, V>
where
    K: Hash + Eq + Clone,
{
    inner: Arc<Mutex<EmberCache<K, V>>>,
    stats: Arc<CacheStats>,
}

impl<K, V> Clone for SharedCache<K, V>
where
    K: Hash + Eq + Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            stats: Arc::clone(&self.stats),
        }
    }
}

impl<K, V> SharedCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a shared cache bounded to `capacity` entries
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        let cache = EmberCache::new(capacity);
        let stats = cache.stats_handle();

        Self {
            inner: Arc::new(Mutex::new(cache)),
            stats,
        }
    }

    /// Register the eviction notification hook, replacing any previous one
    pub fn on_evict<F>(&self, hook: F)
    where
        F: FnMut(&K, &mut Entry<V>) + Send + 'static,
    {
        self.inner.lock().on_evict(hook);
    }

    /// Register the miss loader, replacing any previous one
    pub fn on_load<F>(&self, hook: F)
    where
        F: FnMut(&K) -> Option<V> + Send + 'static,
    {
        self.inner.lock().on_load(hook);
    }

    /// Register the dirty write-back hook, replacing any previous one
    pub fn on_save<F>(&self, hook: F)
    where
        F: FnMut(&K, &V) + Send + 'static,
    {
        self.inner.lock().on_save(hook);
    }

    /// Look up a value, loading it on a miss if a loader is registered
    ///
    /// Returns a clone of the cached value; see [`EmberCache::get`] for the
    /// hit/miss/load semantics.
    pub fn get(&self, key: &K) -> Result<Option<V>, Error<K>>
    where
        V: Clone,
    {
        self.inner.lock().get(key).map(|value| value.cloned())
    }

    /// Insert or overwrite a value
    pub fn put(&self, key: K, value: V)
    where
        V: PartialEq,
    {
        self.inner.lock().put(key, value);
    }

    /// Remove a key, running the eviction sequence for it
    pub fn remove(&self, key: &K) -> bool {
        self.inner.lock().remove(key)
    }

    /// Drain every entry, oldest first, through the eviction sequence
    pub fn flush(&self) {
        self.inner.lock().flush();
    }

    /// Discard all entries without running hooks and set a new capacity
    pub fn reset(&self, capacity: usize) {
        self.inner.lock().reset(capacity);
    }

    /// Whether the key is currently cached
    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().contains(key)
    }

    /// Get the current number of cached entries
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Get the cache capacity
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Get cache statistics without taking the lock
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}
