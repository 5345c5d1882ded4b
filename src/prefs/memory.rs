use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

use super::{Changes, PreferenceStore, StoreError};

/// An in-process store. Values live as long as the store does.
///
/// Counts commits so callers can check whether anything was written.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<BTreeMap<String, String>>,
    commits: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value without counting it as a commit.
    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        self
    }

    /// Number of non-empty commits applied so far.
    pub fn commits(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }

    /// Raw lookup, `None` when the key was never written.
    pub fn value(&self, key: &str) -> Option<String> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn get_string(&self, key: &str, default: &str) -> String {
        self.value(key).unwrap_or_else(|| default.to_owned())
    }

    fn apply(&self, changes: Changes) -> Result<(), StoreError> {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        values.extend(changes);
        self.commits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_returns_default() {
        let store = MemoryStore::new();
        assert_eq!(store.get_string("theme", "dark"), "dark");
        assert_eq!(store.value("theme"), None);
    }

    #[test]
    fn seeded_value_is_not_a_commit() {
        let store = MemoryStore::new().with_value("theme", "light");
        assert_eq!(store.get_string("theme", "dark"), "light");
        assert_eq!(store.commits(), 0);
    }

    #[test]
    fn apply_overwrites_existing_values() {
        let store = MemoryStore::new().with_value("theme", "light");
        let mut changes = Changes::new();
        changes.insert("theme".to_owned(), "dark".to_owned());
        store.apply(changes).unwrap();
        assert_eq!(store.value("theme").as_deref(), Some("dark"));
        assert_eq!(store.commits(), 1);
    }
}
