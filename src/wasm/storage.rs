use web_sys::Storage;

use crate::theme::{MemoryStore, PreferenceStore};

/// `window.localStorage`, or an in-memory map when the browser refuses it
/// (private mode, disabled storage).
pub enum LocalStorage {
    Browser(Storage),
    Fallback(MemoryStore),
}

impl LocalStorage {
    pub fn open() -> Self {
        match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(Some(storage))) => LocalStorage::Browser(storage),
            _ => {
                log::warn!("localStorage unavailable; theme will not persist");
                LocalStorage::Fallback(MemoryStore::new())
            }
        }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            LocalStorage::Browser(s) => s.get_item(key).ok().flatten(),
            LocalStorage::Fallback(m) => m.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        match self {
            LocalStorage::Browser(s) => {
                if let Err(e) = s.set_item(key, value) {
                    log::warn!("could not persist `{key}`: {e:?}");
                }
            }
            LocalStorage::Fallback(m) => m.set(key, value),
        }
    }
}
