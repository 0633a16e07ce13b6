//! Local Board Cache
//!
//! Keeps the columns of the unsaved local board in storage as JSON.

use crate::domain::{fill_missing_ids, Column};
use crate::session::KeyValueStore;
use crate::templates::default_columns;

pub struct LocalBoardCache<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> LocalBoardCache<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    /// Cached columns, or the default template when nothing usable is stored.
    /// Entries saved without ids get ones derived from their titles.
    pub fn load(&self) -> Vec<Column> {
        let Some(raw) = self.store.get(&self.key) else {
            return default_columns();
        };
        match serde_json::from_str::<Vec<Column>>(&raw) {
            Ok(mut columns) => {
                fill_missing_ids(&mut columns);
                columns
            }
            Err(e) => {
                log::warn!("[CACHE] discarding unreadable board cache: {}", e);
                default_columns()
            }
        }
    }

    pub fn save(&self, columns: &[Column]) {
        match serde_json::to_string(columns) {
            Ok(raw) => self.store.set(&self.key, &raw),
            Err(e) => log::warn!("[CACHE] could not serialize board: {}", e),
        }
    }

    pub fn clear(&self) {
        self.store.remove(&self.key);
    }
}
