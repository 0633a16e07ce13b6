//! Browser Storage
//!
//! `KeyValueStore` over `window.localStorage`. Every access is best effort:
//! private browsing or a missing window simply means nothing is stored.

use epitrello_core::cache::LocalBoardCache;
use epitrello_core::session::KeyValueStore;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("[STORAGE] could not write '{}'", key);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Cache of the local (unsaved) board, keyed per config
pub fn local_board_cache() -> LocalBoardCache<BrowserStorage> {
    LocalBoardCache::new(BrowserStorage, crate::commands::config().board_cache_key)
}
