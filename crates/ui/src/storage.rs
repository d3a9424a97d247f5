//! `KeyValueStore` over `window.localStorage`

use revenue_dashboard_core::error::StoreError;
use revenue_dashboard_core::store::KeyValueStore;
use wasm_bindgen::JsValue;
use web_sys::{Storage, Window};

/// Local storage handle; `None` when the browser refuses to hand one out
/// (disabled storage, some private modes, sandboxed frames)
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn from_window(window: &Window) -> Self {
        Self {
            storage: window.local_storage().ok().flatten(),
        }
    }

    fn storage(&self) -> Result<&Storage, StoreError> {
        self.storage.as_ref().ok_or(StoreError::Unavailable)
    }
}

fn js_reason(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?.get_item(key).map_err(|e| StoreError::Read {
            key: key.to_string(),
            reason: js_reason(&e),
        })
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_string(),
            reason: js_reason(&e),
        })
    }
}
