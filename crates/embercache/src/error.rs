//! Error types for embercache

use std::fmt;

/// Error types for cache operations
///
/// Generic over the key type so callers can recover the key that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error<K> {
    /// The load hook declined to produce a value for a missing key
    LoadFailed {
        /// Key whose load was attempted
        key: K,
    },
}

impl<K: fmt::Debug> fmt::Display for Error<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::LoadFailed { key } => write!(f, "Load failed for item: {:?}", key),
        }
    }
}

impl<K: fmt::Debug> std::error::Error for Error<K> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_failed_display() {
        let err = Error::LoadFailed { key: "item-9" };
        assert_eq!(err.to_string(), "Load failed for item: \"item-9\"");
    }
}
