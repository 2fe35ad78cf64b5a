use std::cell::Cell;

use crate::client::service::{submit_record, RecordService, ServiceError};
use crate::client::store::records::{compare_fields, row_key, ListPhase, ListStore};
use crate::model::api::QueryOptions;
use crate::model::contact::{Contact, ContactDraft};

struct FakeContacts {
    records: Vec<Contact>,
    fail_delete: bool,
    created: Cell<u32>,
}

impl FakeContacts {
    fn new(records: Vec<Contact>) -> Self {
        Self {
            records,
            fail_delete: false,
            created: Cell::new(0),
        }
    }
}

impl RecordService for FakeContacts {
    type Record = Contact;
    type Draft = ContactDraft;

    async fn get_all(&self, _options: &QueryOptions) -> Result<Vec<Contact>, ServiceError> {
        Ok(self.records.clone())
    }

    async fn create(&self, _draft: &ContactDraft) -> Result<(), ServiceError> {
        self.created.set(self.created.get() + 1);
        Ok(())
    }

    async fn update(&self, _id: &str, _draft: &ContactDraft) -> Result<(), ServiceError> {
        Ok(())
    }

    async fn delete(&self, _id: &str) -> Result<(), ServiceError> {
        if self.fail_delete {
            Err(ServiceError::Service {
                status: 404,
                message: "The record was not found".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

fn contact(id: &str, fullname: &str) -> Contact {
    Contact {
        contactid: Some(id.to_string()),
        fullname: Some(fullname.to_string()),
        ..Contact::default()
    }
}

fn sample_contacts() -> Vec<Contact> {
    vec![
        contact("1", "Alice Smith"),
        contact("2", "Bob Jones"),
        contact("3", "Carol Alpha"),
    ]
}

fn names(store: &ListStore<Contact>) -> Vec<&str> {
    store
        .filtered()
        .iter()
        .filter_map(|record| record.fullname.as_deref())
        .collect()
}

/// Expect a case-insensitive substring filter on the display name
#[test]
fn filters_by_name_substring() {
    let mut store = ListStore::new();
    store.finish_load(Ok(sample_contacts()));

    store.set_search("al");

    assert_eq!(names(&store), vec!["Alice Smith", "Carol Alpha"]);
}

/// Expect the filter to also match the other searched fields
#[test]
fn filters_by_secondary_fields() {
    let mut records = sample_contacts();
    records[1].emailaddress1 = Some("bob.jones@altitude.example".to_string());

    let mut store = ListStore::new();
    store.finish_load(Ok(records));

    store.set_search("ALTITUDE");

    assert_eq!(names(&store), vec!["Bob Jones"]);
}

/// Expect clearing the search to restore the full collection
#[test]
fn clearing_search_restores_all() {
    let mut store = ListStore::new();
    store.finish_load(Ok(sample_contacts()));

    store.set_search("al");
    store.set_search("");

    assert_eq!(store.filtered().len(), 3);
}

/// Expect a failed load to clear the collection instead of keeping stale rows
#[test]
fn failed_load_clears_collection() {
    let mut store = ListStore::new();
    store.finish_load(Ok(sample_contacts()));

    store.begin_load();
    store.finish_load(Err(ServiceError::Request("connection reset".to_string())));

    assert!(store.filtered().is_empty());
    assert!(store.error.is_some());
    assert_eq!(store.phase(), ListPhase::Empty { searching: false });
}

/// Expect the empty state to distinguish an empty store from an empty search
#[test]
fn empty_message_is_context_sensitive() {
    let mut store = ListStore::<Contact>::new();
    store.finish_load(Ok(Vec::new()));

    assert_eq!(store.empty_message("contacts"), "No contacts found.");

    store.set_search("zzz");
    assert_eq!(
        store.empty_message("contacts"),
        "No contacts found matching your search."
    );
    assert_eq!(store.phase(), ListPhase::Empty { searching: true });
}

/// Expect a failed delete to surface an error and leave the local list as it
/// was before the attempt
#[tokio::test]
async fn failed_delete_leaves_collection_untouched() {
    let mut service = FakeContacts::new(sample_contacts());
    service.fail_delete = true;

    let mut store = ListStore::new();
    store.finish_load(service.get_all(&QueryOptions::new()).await);
    assert_eq!(store.filtered().len(), 3);

    match service.delete("missing").await {
        Ok(()) => panic!("delete unexpectedly succeeded"),
        Err(error) => store.fail_action(error),
    }

    assert_eq!(store.filtered().len(), 3);
    assert!(store.error.is_some());
}

/// Expect a draft with an empty required field to fail validation without
/// calling the remote create operation
#[tokio::test]
async fn create_with_empty_required_field_never_calls_remote() {
    let service = FakeContacts::new(Vec::new());
    let draft = ContactDraft {
        firstname: "Ada".to_string(),
        ..ContactDraft::default()
    };

    let result = submit_record(&service, &draft, None).await;

    assert_eq!(
        result,
        Err(ServiceError::Validation("Last name is required".to_string()))
    );
    assert_eq!(service.created.get(), 0);
}

/// Expect a valid draft to reach the remote create operation
#[tokio::test]
async fn valid_create_reaches_remote() {
    let service = FakeContacts::new(Vec::new());
    let draft = ContactDraft {
        lastname: "Lovelace".to_string(),
        emailaddress1: "ada@contoso.com".to_string(),
        ..ContactDraft::default()
    };

    let result = submit_record(&service, &draft, None).await;

    assert_eq!(result, Ok(()));
    assert_eq!(service.created.get(), 1);
}

/// Expect a successful create to close the dialog and clear the search term
/// so the new record is visible after the reload
#[test]
fn finish_create_resets_dialog_and_search() {
    let mut store = ListStore::new();
    store.finish_load(Ok(sample_contacts()));
    store.open_create();
    store.set_search("al");
    store.begin_submit();

    store.finish_create("Contact created successfully");

    assert!(!store.create_open);
    assert!(!store.submitting);
    assert_eq!(store.search(), "");
    assert_eq!(store.filtered().len(), 3);
    assert_eq!(store.success.as_deref(), Some("Contact created successfully"));
}

/// Expect a failed submission to keep the dialog open with the error shown
#[test]
fn failed_submission_keeps_dialog_open() {
    let mut store = ListStore::<Contact>::new();
    store.open_create();
    store.begin_submit();

    store.fail_submit(ServiceError::Service {
        status: 400,
        message: "invalid payload".to_string(),
    });

    assert!(store.create_open);
    assert!(!store.submitting);
    assert!(store.error.is_some());
}

/// Expect repeated sorting on one column to flip its direction
#[test]
fn toggle_sort_flips_direction() {
    let mut store = ListStore::new();
    store.finish_load(Ok(sample_contacts()));

    store.toggle_sort("name", |a, b| compare_fields(&a.fullname, &b.fullname));
    assert_eq!(store.sort(), Some(("name", false)));
    assert_eq!(names(&store), vec!["Alice Smith", "Bob Jones", "Carol Alpha"]);

    store.toggle_sort("name", |a, b| compare_fields(&a.fullname, &b.fullname));
    assert_eq!(store.sort(), Some(("name", true)));
    assert_eq!(names(&store), vec!["Carol Alpha", "Bob Jones", "Alice Smith"]);
}

/// Expect row keys to reuse the store identifier and to invent one only for
/// unresolved rows
#[test]
fn row_keys_fall_back_to_random_identifiers() {
    let resolved = contact("1", "Alice Smith");
    assert_eq!(row_key(&resolved), "1");

    let unresolved = Contact::default();
    let first = row_key(&unresolved);
    let second = row_key(&unresolved);

    assert!(first.starts_with("row-"));
    assert_ne!(first, second);
}
