//! Persistence over a string key/value store
//!
//! The browser provides `localStorage`; tests and headless callers use
//! [`MemoryStore`]. The load/save helpers never fail: storage problems are
//! logged and the caller carries on with in-memory state.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::StoreError;
use crate::revenue::Revenue;
use crate::theme::Theme;

/// Minimal string key/value store, shaped like Web Storage
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store
///
/// Reads and writes can be switched to fail, which mimics quota errors and
/// disabled storage.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    items: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.items.insert(key.to_string(), value.to_string());
        self
    }

    pub fn set_fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Raw stored value, bypassing failure injection
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.fail_reads {
            return Err(StoreError::Read {
                key: key.to_string(),
                reason: "reads disabled".to_string(),
            });
        }
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Write {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            });
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stored revenue triple, if present and well-formed
pub fn load_revenue<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<Revenue> {
    let raw = match store.get_item(key) {
        Ok(Some(raw)) if !raw.is_empty() => raw,
        Ok(_) => return None,
        Err(e) => {
            debug!(error = %e, "revenue read failed, using page defaults");
            return None;
        }
    };

    match Revenue::from_json(&raw) {
        Ok(revenue) => Some(revenue),
        Err(e) => {
            warn!(error = %e, "discarding stored revenue");
            None
        }
    }
}

/// Persist the whole triple; failures are dropped
pub fn save_revenue<S: KeyValueStore + ?Sized>(store: &mut S, key: &str, revenue: Revenue) {
    if let Err(e) = store.set_item(key, &revenue.to_json()) {
        debug!(error = %e, "revenue not persisted");
    }
}

/// Stored theme, if any. An empty value counts as absent.
pub fn load_theme<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<Theme> {
    match store.get_item(key) {
        Ok(Some(raw)) if !raw.is_empty() => Some(Theme::from_stored(&raw)),
        Ok(_) => None,
        Err(e) => {
            debug!(error = %e, "theme read failed");
            None
        }
    }
}

pub fn save_theme<S: KeyValueStore + ?Sized>(store: &mut S, key: &str, theme: Theme) {
    if let Err(e) = store.set_item(key, theme.as_str()) {
        debug!(error = %e, "theme not persisted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "revenues_array";

    #[test]
    fn revenue_round_trip() {
        let mut store = MemoryStore::new();
        save_revenue(&mut store, KEY, Revenue::new(100, 200, 300));
        assert_eq!(store.raw(KEY), Some("[100,200,300]"));
        assert_eq!(load_revenue(&store, KEY), Some(Revenue::new(100, 200, 300)));
    }

    #[test]
    fn absent_empty_or_malformed_revenue_is_none() {
        assert_eq!(load_revenue(&MemoryStore::new(), KEY), None);
        assert_eq!(load_revenue(&MemoryStore::new().with_item(KEY, ""), KEY), None);
        assert_eq!(load_revenue(&MemoryStore::new().with_item(KEY, "{oops"), KEY), None);
        assert_eq!(load_revenue(&MemoryStore::new().with_item(KEY, "[1,2]"), KEY), None);
    }

    #[test]
    fn failing_store_is_tolerated() {
        let mut store = MemoryStore::new().with_item(KEY, "[1,2,3]");
        store.set_fail_reads(true);
        store.set_fail_writes(true);
        assert_eq!(load_revenue(&store, KEY), None);
        save_revenue(&mut store, KEY, Revenue::new(9, 9, 9));
        assert_eq!(store.raw(KEY), Some("[1,2,3]"));
    }

    #[test]
    fn theme_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(load_theme(&store, "dashboard_theme"), None);
        save_theme(&mut store, "dashboard_theme", Theme::Dark);
        assert_eq!(store.raw("dashboard_theme"), Some("dark"));
        assert_eq!(load_theme(&store, "dashboard_theme"), Some(Theme::Dark));
    }
}
