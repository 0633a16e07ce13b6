//! Theme Preference

use super::storage::KeyValueStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Anything other than a stored `"dark"` means light
    pub fn load(store: &impl KeyValueStore, key: &str) -> Self {
        match store.get(key).as_deref() {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn save(self, store: &impl KeyValueStore, key: &str) {
        store.set(key, self.as_str());
    }
}
