use crate::client::nav::PageKey;
use crate::client::store::page::{PageStore, DEFAULT_PAGE};
use crate::client::store::storage::{KeyValueStore, MemoryStorage, PAGE_KEY};

/// Expect Home as the active page when nothing is stored
#[test]
fn defaults_to_home() {
    let store = PageStore::new(MemoryStorage::shared());

    assert_eq!(store.current(), DEFAULT_PAGE);
}

/// Expect the stored page key to be restored at startup
#[test]
fn restores_stored_page() {
    let storage = MemoryStorage::shared();
    storage.set(PAGE_KEY, "Accounts");

    let store = PageStore::new(storage);

    assert_eq!(store.current(), "Accounts");
}

/// Expect change to persist the key on every call
#[test]
fn change_persists_key() {
    let storage = MemoryStorage::shared();
    let mut store = PageStore::new(storage.clone());

    store.change("Contacts");

    assert_eq!(store.current(), "Contacts");
    assert_eq!(storage.get(PAGE_KEY).as_deref(), Some("Contacts"));
}

/// Expect unknown keys to persist as-is while rendering falls back to the
/// not-found view
#[test]
fn change_persists_unknown_keys() {
    let storage = MemoryStorage::shared();
    let mut store = PageStore::new(storage.clone());

    store.change("Bogus");

    assert_eq!(storage.get(PAGE_KEY).as_deref(), Some("Bogus"));
    assert!(PageKey::parse(store.current()).is_none());
}
