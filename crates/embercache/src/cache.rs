//! Bounded LRU store with eviction, load, and save hooks

use std::hash::Hash;
use std::sync::Arc;

use crate::entry::Entry;
use crate::error::Error;
use crate::hooks::{EvictHook, LoadHook, SaveHook};
use crate::lru::LruIndex;
use crate::stats::CacheStats;

/// Bounded in-memory LRU store
///
/// Holds at most `capacity` entries; inserting a new key at capacity evicts
/// the least recently used entry through the eviction sequence (evict hook,
/// then save hook if the entry is dirty).
///
/// Operations take `&mut self`; the store is single-threaded. Hooks run
/// inline and cannot call back into the store that owns them, since an
/// operation holds the store exclusively for its duration. Use
/// [`SharedCache`] for lock-protected shared access.
///
/// Dropping the store flushes it, so dirty entries reach the save hook on
/// every exit path.
///
/// [`SharedCache`]: crate::SharedCache
pub struct EmberCache<K, V>
where
    K: Hash + Eq + Clone,
{
    index: LruIndex<K, Entry<V>>,
    capacity: usize,
    stats: Arc<CacheStats>,
    evict_hook: Option<EvictHook<K, V>>,
    load_hook: Option<LoadHook<K, V>>,
    save_hook: Option<SaveHook<K, V>>,
}

impl<K, V> EmberCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a cache bounded to `capacity` entries
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than 0");

        Self {
            index: LruIndex::with_capacity(capacity),
            capacity,
            stats: Arc::new(CacheStats::new()),
            evict_hook: None,
            load_hook: None,
            save_hook: None,
        }
    }

    /// Register the eviction notification hook, replacing any previous one
    pub fn on_evict<F>(&mut self, hook: F)
    where
        F: FnMut(&K, &mut Entry<V>) + Send + 'static,
    {
        self.evict_hook = Some(Box::new(hook));
    }

    /// Register the miss loader, replacing any previous one
    pub fn on_load<F>(&mut self, hook: F)
    where
        F: FnMut(&K) -> Option<V> + Send + 'static,
    {
        self.load_hook = Some(Box::new(hook));
    }

    /// Register the dirty write-back hook, replacing any previous one
    pub fn on_save<F>(&mut self, hook: F)
    where
        F: FnMut(&K, &V) + Send + 'static,
    {
        self.save_hook = Some(Box::new(hook));
    }

    /// Look up a value, loading it on a miss if a loader is registered
    ///
    /// A hit marks the key most recently used and leaves its dirty flag
    /// untouched. On a miss the loader (if any) runs: a produced value is
    /// inserted as a fresh clean entry through the normal insertion path
    /// (evicting if necessary) and returned; a declined load is an error.
    /// Without a loader a miss is `Ok(None)`.
    pub fn get(&mut self, key: &K) -> Result<Option<&V>, Error<K>> {
        if self.index.contains(key) {
            self.stats.record_hit();
            return Ok(self.index.get(key).map(|entry| entry.value()));
        }

        self.stats.record_miss();

        let loaded = match self.load_hook.as_mut() {
            Some(loader) => loader(key),
            None => return Ok(None),
        };

        match loaded {
            Some(value) => {
                self.stats.record_load();
                self.insert_fresh(key.clone(), value);
                Ok(self.index.peek(key).map(|entry| entry.value()))
            }
            None => Err(Error::LoadFailed { key: key.clone() }),
        }
    }

    /// Insert or overwrite a value
    ///
    /// Overwriting with a different value marks the entry dirty; an equal
    /// value leaves the dirty flag untouched. Either way the key becomes
    /// most recently used. A new key at capacity evicts the least recently
    /// used entry first.
    pub fn put(&mut self, key: K, value: V)
    where
        V: PartialEq,
    {
        if let Some(entry) = self.index.get_mut(&key) {
            if entry.value != value {
                entry.dirty = true;
            }
            entry.value = value;
        } else {
            self.insert_fresh(key, value);
        }
    }

    /// Remove a key, running the eviction sequence for it
    ///
    /// Returns whether the key was present. Removing an absent key is a
    /// no-op and fires no hooks.
    pub fn remove(&mut self, key: &K) -> bool {
        match self.index.remove(key) {
            Some(mut entry) => {
                self.run_eviction(key, &mut entry);
                self.stats.record_eviction();
                true
            }
            None => false,
        }
    }

    /// Drain every entry, oldest first, through the eviction sequence
    ///
    /// Leaves the cache empty with its capacity unchanged. Flushing an empty
    /// cache is a no-op.
    pub fn flush(&mut self) {
        while let Some((key, mut entry)) = self.index.pop_lru() {
            self.run_eviction(&key, &mut entry);
            self.stats.record_eviction();
        }
    }

    /// Discard all entries without running hooks and set a new capacity
    ///
    /// The hard-clear counterpart of [`flush`](Self::flush): nothing is
    /// notified or saved. Statistics are cleared; registered hooks survive.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn reset(&mut self, capacity: usize) {
        assert!(capacity > 0, "Capacity must be greater than 0");

        self.index = LruIndex::with_capacity(capacity);
        self.capacity = capacity;
        self.stats.reset();
    }

    /// Read a value without disturbing recency
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.index.peek(key).map(|entry| entry.value())
    }

    /// Whether the key is currently cached
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains(key)
    }

    /// Dirty flag of a cached key, if present
    pub fn is_dirty(&self, key: &K) -> Option<bool> {
        self.index.peek(key).map(|entry| entry.is_dirty())
    }

    /// Get the current number of cached entries
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Get the cache capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    pub(crate) fn stats_handle(&self) -> Arc<CacheStats> {
        Arc::clone(&self.stats)
    }

    fn insert_fresh(&mut self, key: K, value: V) {
        if self.index.len() >= self.capacity {
            self.evict_lru();
        }
        self.index.insert_mru(key, Entry::new(value));
        self.stats.record_insert();
    }

    fn evict_lru(&mut self) {
        if let Some((key, mut entry)) = self.index.pop_lru() {
            self.run_eviction(&key, &mut entry);
            self.stats.record_eviction();
        }
    }

    /// Eviction sequence: notify, then save if the entry ends up dirty
    fn run_eviction(&mut self, key: &K, entry: &mut Entry<V>) {
        if let Some(hook) = self.evict_hook.as_mut() {
            hook(key, entry);
        }
        if entry.dirty {
            if let Some(hook) = self.save_hook.as_mut() {
                hook(key, &entry.value);
                entry.dirty = false;
                self.stats.record_save();
            }
        }
    }
}

impl<K, V> Drop for EmberCache<K, V>
where
    K: Hash + Eq + Clone,
{
    fn drop(&mut self) {
        self.flush();
    }
}
