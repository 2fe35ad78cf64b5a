//! Persisted local key-value storage.
//!
//! Keys are read once at startup and written synchronously on every change;
//! there is no batching and the last writer wins. The trait exists so UI
//! state stores take an injected backend and tests can substitute the
//! in-memory one.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub const THEME_KEY: &str = "isDarkTheme";
pub const PAGE_KEY: &str = "currentPage";
pub const ALIGNMENT_KEY: &str = "pageAlignments";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

pub type SharedStorage = Rc<dyn KeyValueStore>;

/// Browser local storage backend.
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

pub fn browser() -> SharedStorage {
    Rc::new(BrowserStorage)
}

/// In-memory backend used by tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn shared() -> Rc<Self> {
        Rc::new(Self::default())
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
    }
}
