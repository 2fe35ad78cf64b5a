use crate::client::store::alignment::{AlignmentStore, PageAlignment};
use crate::client::store::storage::{KeyValueStore, MemoryStorage, ALIGNMENT_KEY};

fn volatile_store() -> AlignmentStore {
    AlignmentStore::new(MemoryStorage::shared(), false)
}

/// Expect center for any key absent from the initial mapping
#[test]
fn unknown_keys_read_as_center() {
    let store = volatile_store();

    assert_eq!(store.get("Bogus"), PageAlignment::Center);
}

/// Expect the initial per-page assignment to be in place
#[test]
fn initial_assignment_applies() {
    let store = volatile_store();

    assert_eq!(store.get("Home"), PageAlignment::Center);
    assert_eq!(store.get("Chat"), PageAlignment::Left);
    assert_eq!(store.get("Teams"), PageAlignment::Left);
    assert_eq!(store.get("Apps"), PageAlignment::Center);
    assert_eq!(store.get("Settings"), PageAlignment::Left);
}

/// Expect toggle applied twice to restore the original value
#[test]
fn toggle_is_its_own_inverse() {
    let mut store = volatile_store();
    let original = store.get("Home");

    store.toggle("Home");
    assert_ne!(store.get("Home"), original);

    store.toggle("Home");
    assert_eq!(store.get("Home"), original);
}

/// Expect only center and left to ever be produced by the toggle
#[test]
fn toggle_flips_between_center_and_left() {
    let mut store = volatile_store();

    store.toggle("Chat");
    assert_eq!(store.get("Chat"), PageAlignment::Center);

    store.toggle("Chat");
    assert_eq!(store.get("Chat"), PageAlignment::Left);
}

/// Expect no writes to storage while persistence is off
#[test]
fn volatile_registry_never_writes() {
    let storage = MemoryStorage::shared();
    let mut store = AlignmentStore::new(storage.clone(), false);

    store.toggle("Home");

    assert!(storage.get(ALIGNMENT_KEY).is_none());
}

/// Expect persisted preferences to be written through and restored
#[test]
fn persistent_registry_round_trips() {
    let storage = MemoryStorage::shared();

    let mut store = AlignmentStore::new(storage.clone(), true);
    store.toggle("Home");
    assert!(storage.get(ALIGNMENT_KEY).is_some());

    let restored = AlignmentStore::new(storage, true);
    assert_eq!(restored.get("Home"), PageAlignment::Left);
}
