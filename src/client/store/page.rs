use crate::client::store::storage::{SharedStorage, PAGE_KEY};

pub const DEFAULT_PAGE: &str = "Home";

/// The active page key, persisted across sessions as a raw string.
pub struct PageStore {
    current: String,
    storage: SharedStorage,
}

impl PageStore {
    pub fn new(storage: SharedStorage) -> Self {
        let current = storage
            .get(PAGE_KEY)
            .unwrap_or_else(|| DEFAULT_PAGE.to_string());

        Self { current, storage }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Sets and persists the active key, recognized or not; rendering falls
    /// back to the not-found view for keys outside the dispatch table.
    pub fn change(&mut self, key: &str) {
        self.current = key.to_string();
        self.storage.set(PAGE_KEY, key);
    }
}
