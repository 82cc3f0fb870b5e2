//! Process-wide default cache
//!
//! Convenience instance for callers that want one shared cache of untyped
//! blobs without threading a handle around. Outside the core store's
//! responsibility.

use std::sync::OnceLock;

use crate::shared::SharedCache;

/// Capacity of the process-wide default cache
pub const DEFAULT_CAPACITY: usize = 1024;

static DEFAULT: OnceLock<SharedCache<String, Vec<u8>>> = OnceLock::new();

/// The process-wide default cache, created on first use
///
/// Lives for the whole process and is never dropped, so the drop-flush
/// never runs for it; callers that register a save hook must call
/// [`SharedCache::flush`] themselves before exit.
pub fn default_cache() -> &'static SharedCache<String, Vec<u8>> {
    DEFAULT.get_or_init(|| SharedCache::new(DEFAULT_CAPACITY))
}
