use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tempfile::NamedTempFile;
use toml::{Table, Value};

use super::{Changes, PreferenceStore, StoreError};

/// Serializes read-merge-write cycles across every `FileStore` in the process.
static WRITE_LOCK: Mutex<()> = Mutex::new(());

/// A store persisted as a flat TOML table of `key = "value"` entries.
///
/// The file is re-read on every lookup, so edits made by other processes are
/// visible immediately. A missing file behaves like an empty store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the current table. Contents that are not UTF-8 TOML are treated
    /// as empty so the next commit replaces them.
    fn read_table(&self) -> Result<Table, StoreError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Table::new()),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        let contents = match String::from_utf8(bytes) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!("prefs: ignoring non-UTF-8 {}: {e}", self.path.display());
                return Ok(Table::new());
            }
        };
        match toml::from_str::<Table>(&contents) {
            Ok(table) => Ok(table),
            Err(e) => {
                tracing::warn!("prefs: ignoring unparseable {}: {e}", self.path.display());
                Ok(Table::new())
            }
        }
    }

    /// Directory holding the file; temp files are created here so the final
    /// rename stays on one filesystem.
    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn write_err(&self, source: std::io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl PreferenceStore for FileStore {
    fn get_string(&self, key: &str, default: &str) -> String {
        let table = match self.read_table() {
            Ok(table) => table,
            Err(e) => {
                tracing::warn!("prefs: {e}, using default for {key:?}");
                return default.to_owned();
            }
        };
        match table.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(other) => {
                tracing::debug!(
                    "prefs: {key:?} holds a {}, not a string; using default",
                    other.type_str()
                );
                default.to_owned()
            }
            None => default.to_owned(),
        }
    }

    fn apply(&self, changes: Changes) -> Result<(), StoreError> {
        let _guard = WRITE_LOCK.lock().unwrap_or_else(PoisonError::into_inner);

        let mut table = self.read_table()?;
        for (key, value) in changes {
            table.insert(key, Value::String(value));
        }
        let contents = toml::to_string(&table).map_err(|source| StoreError::Serialize {
            path: self.path.clone(),
            source,
        })?;

        let dir = self.dir();
        std::fs::create_dir_all(dir).map_err(|e| self.write_err(e))?;
        // Unique per commit, so writers in other processes never share it.
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.write_err(e))?;
        tmp.write_all(contents.as_bytes()).map_err(|e| self.write_err(e))?;
        tmp.persist(&self.path).map_err(|e| self.write_err(e.error))?;

        tracing::debug!("prefs: committed {}", self.path.display());
        Ok(())
    }
}
