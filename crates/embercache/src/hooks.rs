//! Hook signatures for cache callbacks
//!
//! Each hook is a single optional slot on the cache; registering a new hook
//! replaces the previous one. Hooks run inline with the operation that
//! triggers them and cannot call back into the cache that owns them, since
//! every operation holds the cache exclusively.

use crate::entry::Entry;

/// Notification that an entry is leaving the cache
///
/// Runs before the save step; the hook may mutate the entry, including its
/// dirty flag, and the save step honors the result. Eviction itself is not
/// cancellable.
pub type EvictHook<K, V> = Box<dyn FnMut(&K, &mut Entry<V>) + Send>;

/// Loader invoked on a cache miss
///
/// `Some(value)` is inserted as a fresh clean entry and returned to the
/// caller; `None` fails the lookup with [`Error::LoadFailed`].
///
/// [`Error::LoadFailed`]: crate::Error::LoadFailed
pub type LoadHook<K, V> = Box<dyn FnMut(&K) -> Option<V> + Send>;

/// Write-back invoked for a dirty entry leaving the cache
///
/// Fire-and-forget: the entry is discarded afterwards, so value changes made
/// here are not persisted back into the cache.
pub type SaveHook<K, V> = Box<dyn FnMut(&K, &V) + Send>;
