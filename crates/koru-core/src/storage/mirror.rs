//! Best-effort mirroring of the primary store to a secondary one.
//!
//! The secondary stands in for an eventually-consistent remote document
//! store: writes go to both but a secondary failure is logged and
//! swallowed, and reads fall back to the secondary only when the
//! primary has no value. Conflict policy is last-write-wins.

use super::KvStore;
use crate::error::StorageError;

/// A primary [`KvStore`] mirrored to a best-effort secondary.
pub struct MirroredStore<P, S> {
    primary: P,
    secondary: S,
}

impl<P: KvStore, S: KvStore> MirroredStore<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

impl<P: KvStore, S: KvStore> KvStore for MirroredStore<P, S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if let Some(value) = self.primary.get(key)? {
            return Ok(Some(value));
        }
        match self.secondary.get(key) {
            Ok(value) => Ok(value),
            Err(err) => {
                tracing::warn!(key, %err, "mirror read failed, treating as absent");
                Ok(None)
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.primary.set(key, value)?;
        if let Err(err) = self.secondary.set(key, value) {
            tracing::warn!(key, %err, "mirror write failed");
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.primary.remove(key)?;
        if let Err(err) = self.secondary.remove(key) {
            tracing::warn!(key, %err, "mirror remove failed");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    /// A store whose operations always fail.
    struct BrokenStore;

    impl KvStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::QueryFailed("broken".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::QueryFailed("broken".to_string()))
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::QueryFailed("broken".to_string()))
        }
    }

    #[test]
    fn writes_reach_both_stores() {
        let store = MirroredStore::new(MemoryStore::new(), MemoryStore::new());
        store.set("k", "v").unwrap();
        assert_eq!(store.primary.get("k").unwrap().as_deref(), Some("v"));
        assert_eq!(store.secondary.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn reads_fall_back_to_secondary() {
        let primary = MemoryStore::new();
        let secondary = MemoryStore::new();
        secondary.set("k", "remote").unwrap();

        let store = MirroredStore::new(primary, secondary);
        assert_eq!(store.get("k").unwrap().as_deref(), Some("remote"));
    }

    #[test]
    fn primary_wins_over_secondary() {
        let primary = MemoryStore::new();
        let secondary = MemoryStore::new();
        primary.set("k", "local").unwrap();
        secondary.set("k", "remote").unwrap();

        let store = MirroredStore::new(primary, secondary);
        assert_eq!(store.get("k").unwrap().as_deref(), Some("local"));
    }

    #[test]
    fn secondary_failure_is_swallowed() {
        let store = MirroredStore::new(MemoryStore::new(), BrokenStore);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }
}
