//! Cached entry with dirty tracking

/// A stored value together with its dirty flag
///
/// The dirty flag records whether the value has changed since the entry was
/// inserted or last saved. Eviction hooks receive `&mut Entry` and may adjust
/// either field before the save step runs.
#[derive(Debug)]
pub struct Entry<V> {
    pub(crate) value: V,
    pub(crate) dirty: bool,
}

impl<V> Entry<V> {
    pub(crate) fn new(value: V) -> Self {
        Self {
            value,
            dirty: false,
        }
    }

    /// Borrow the stored value
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Whether the value has changed since it was last saved
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Replace the stored value and mark the entry dirty
    pub fn set_value(&mut self, value: V) {
        self.value = value;
        self.dirty = true;
    }

    /// Force the dirty flag
    pub fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }
}
