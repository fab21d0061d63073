//! File Store
//!
//! `KeyValueStore` backed by one file per key under a base directory. The
//! desktop counterpart of browser localStorage.

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::domain::{DomainError, DomainResult};
use super::traits::KeyValueStore;

pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        match std::fs::read_to_string(self.slot_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::Internal(format!("read {}: {}", key, e))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> DomainResult<()> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| DomainError::Internal(format!("create {}: {}", self.dir.display(), e)))?;
        std::fs::write(self.slot_path(key), value)
            .map_err(|e| DomainError::Internal(format!("write {}: {}", key, e)))
    }

    fn remove(&mut self, key: &str) -> DomainResult<()> {
        match std::fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DomainError::Internal(format!("remove {}: {}", key, e))),
        }
    }
}
