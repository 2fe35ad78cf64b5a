use crate::client::store::storage::{KeyValueStore, MemoryStorage, THEME_KEY};
use crate::client::store::theme::{ThemeMode, ThemeStore};

/// Expect dark mode when nothing is stored
#[test]
fn defaults_to_dark() {
    let store = ThemeStore::new(MemoryStorage::shared());

    assert_eq!(store.mode(), ThemeMode::Dark);
}

/// Expect dark mode when the stored value is not a JSON boolean
#[test]
fn defaults_to_dark_for_unparsable_values() {
    let storage = MemoryStorage::shared();
    storage.set(THEME_KEY, "not-a-boolean");

    let store = ThemeStore::new(storage);

    assert_eq!(store.mode(), ThemeMode::Dark);
}

/// Expect a stored false to restore light mode
#[test]
fn restores_light_mode() {
    let storage = MemoryStorage::shared();
    storage.set(THEME_KEY, "false");

    let store = ThemeStore::new(storage);

    assert_eq!(store.mode(), ThemeMode::Light);
}

/// Expect one toggle to persist false and a second to persist true again
#[test]
fn toggle_persists_json_boolean() {
    let storage = MemoryStorage::shared();
    let mut store = ThemeStore::new(storage.clone());

    store.toggle();
    assert_eq!(store.mode(), ThemeMode::Light);
    assert_eq!(storage.get(THEME_KEY).as_deref(), Some("false"));

    store.toggle();
    assert_eq!(store.mode(), ThemeMode::Dark);
    assert_eq!(storage.get(THEME_KEY).as_deref(), Some("true"));
}
