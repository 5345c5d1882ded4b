//! Persistent key-value preference storage.
//!
//! Stores expose a read path (`get_string`) and a batched write path: callers
//! open an [`Editor`], stage values with [`Editor::put_string`], then
//! [`Editor::commit`] them in one go.

mod file;
mod memory;

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Pending writes collected by an [`Editor`], keyed by preference name.
pub type Changes = BTreeMap<String, String>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("reading preferences from {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("writing preferences to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("serializing preferences for {}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: toml::ser::Error,
    },
}

/// A persistent string key-value store.
pub trait PreferenceStore {
    /// Return the value stored under `key`, or `default` if there is none.
    fn get_string(&self, key: &str, default: &str) -> String;

    /// Persist a batch of changes. Either all of them land or none do.
    fn apply(&self, changes: Changes) -> Result<(), StoreError>;

    /// Start a batch of writes against this store.
    fn edit(&self) -> Editor<'_, Self> {
        Editor {
            store: self,
            pending: Changes::new(),
        }
    }
}

/// Staged writes against a [`PreferenceStore`]; nothing is persisted until
/// [`commit`](Editor::commit).
#[must_use = "an editor does nothing until committed"]
pub struct Editor<'a, S: ?Sized> {
    store: &'a S,
    pending: Changes,
}

impl<S: PreferenceStore + ?Sized> Editor<'_, S> {
    pub fn put_string(mut self, key: &str, value: &str) -> Self {
        self.pending.insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn commit(self) -> Result<(), StoreError> {
        if self.pending.is_empty() {
            return Ok(());
        }
        self.store.apply(self.pending)
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn get_string(&self, key: &str, default: &str) -> String {
        (**self).get_string(key, default)
    }

    fn apply(&self, changes: Changes) -> Result<(), StoreError> {
        (**self).apply(changes)
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Arc<S> {
    fn get_string(&self, key: &str, default: &str) -> String {
        (**self).get_string(key, default)
    }

    fn apply(&self, changes: Changes) -> Result<(), StoreError> {
        (**self).apply(changes)
    }
}
