//! Browser localStorage Store
//!
//! `KeyValueStore` over `window.localStorage`, the slot the legacy
//! application persisted to. WASM builds only.

use wasm_bindgen::JsValue;

use crate::domain::{DomainError, DomainResult};
use super::traits::KeyValueStore;

pub struct LocalStorageStore {
    storage: web_sys::Storage,
}

impl LocalStorageStore {
    /// Fails when run outside a browsing context or when storage access is
    /// denied (private-mode restrictions, disabled cookies).
    pub fn new() -> DomainResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| DomainError::Internal("no window object".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| DomainError::Internal("localStorage unavailable".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> DomainResult<()> {
        self.storage.set_item(key, value).map_err(js_error)
    }

    fn remove(&mut self, key: &str) -> DomainResult<()> {
        self.storage.remove_item(key).map_err(js_error)
    }
}

fn js_error(e: JsValue) -> DomainError {
    DomainError::Internal(format!("localStorage: {:?}", e))
}
