//! Project Store
//!
//! The persistence adapter: serializes the whole collection into a single
//! named slot of a `KeyValueStore` and reads it back at startup. Writes are
//! full-snapshot overwrites; there are no partial writes, no transactions
//! and no retries.

use crate::domain::{DomainError, DomainResult, Project};
use super::traits::KeyValueStore;

/// Slot key used by the legacy application
pub const STORAGE_KEY: &str = "proyectos";

pub struct ProjectStore<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ProjectStore<S> {
    /// Adapter over the legacy `"proyectos"` slot
    pub fn new(store: S) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Read the persisted collection.
    ///
    /// An absent slot yields an empty collection. A slot that cannot be read
    /// or deserialized also yields an empty collection, logged at `warn`;
    /// persistence is best-effort and never surfaces to the user.
    pub fn load(&self) -> Vec<Project> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("could not read slot {}: {}", self.key, e);
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<Project>>(&raw) {
            Ok(projects) => {
                log::debug!("loaded {} projects from slot {}", projects.len(), self.key);
                projects
            }
            Err(e) => {
                log::warn!("discarding corrupt collection in slot {}: {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Overwrite the slot with a snapshot of the current collection
    pub fn save(&mut self, projects: &[Project]) -> DomainResult<()> {
        let json = serde_json::to_string(projects)
            .map_err(|e| DomainError::Internal(format!("serialize collection: {}", e)))?;
        self.store.set(&self.key, &json)
    }
}
