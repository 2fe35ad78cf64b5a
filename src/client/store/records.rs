//! Headless state for the searchable CRUD list screens.
//!
//! Both record pages drive the same state machine: load replaces the
//! collection wholesale, filtering is a pure client-side recomputation, and
//! every mutation reloads rather than merging. Components only translate
//! this state into markup.

use std::cmp::Ordering;

use crate::client::service::ServiceError;
use crate::model::account::Account;
use crate::model::contact::Contact;

/// A row in a record list screen.
pub trait ListRecord: Clone {
    /// Store identifier; absent for rows the store has not resolved.
    fn record_id(&self) -> Option<&str>;

    /// Substring match against the displayed fields. `needle` is already
    /// lowercased and non-empty.
    fn matches(&self, needle: &str) -> bool;
}

fn field_matches(field: &Option<String>, needle: &str) -> bool {
    field
        .as_deref()
        .is_some_and(|value| value.to_lowercase().contains(needle))
}

impl ListRecord for Contact {
    fn record_id(&self) -> Option<&str> {
        self.contactid.as_deref()
    }

    fn matches(&self, needle: &str) -> bool {
        field_matches(&self.fullname, needle)
            || field_matches(&self.emailaddress1, needle)
            || field_matches(&self.telephone1, needle)
            || field_matches(&self.jobtitle, needle)
    }
}

impl ListRecord for Account {
    fn record_id(&self) -> Option<&str> {
        self.accountid.as_deref()
    }

    fn matches(&self, needle: &str) -> bool {
        field_matches(&self.name, needle)
            || field_matches(&self.accountnumber, needle)
            || field_matches(&self.emailaddress1, needle)
            || field_matches(&self.address1_telephone1, needle)
            || field_matches(&self.websiteurl, needle)
    }
}

/// Rendering key for a row, falling back to a freshly generated random
/// identifier when the store identifier is absent. Render-only; never sent
/// back to the store.
pub fn row_key<R: ListRecord>(record: &R) -> String {
    match record.record_id() {
        Some(id) => id.to_string(),
        None => format!("row-{:016x}", rand::random::<u64>()),
    }
}

/// Case-insensitive ordering of optional display fields; absent values sort
/// as empty strings.
pub fn compare_fields(a: &Option<String>, b: &Option<String>) -> Ordering {
    a.as_deref()
        .unwrap_or_default()
        .to_lowercase()
        .cmp(&b.as_deref().unwrap_or_default().to_lowercase())
}

/// Header suffix marking the active sort column and direction.
pub fn sort_marker(sort: Option<(&'static str, bool)>, column: &'static str) -> &'static str {
    match sort {
        Some((active, false)) if active == column => " ↑",
        Some((active, true)) if active == column => " ↓",
        _ => "",
    }
}

pub struct SortSpec<R> {
    pub column: &'static str,
    pub descending: bool,
    compare: fn(&R, &R) -> Ordering,
}

impl<R> Clone for SortSpec<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for SortSpec<R> {}

/// Render phase of the grid area. Error and success messages are carried
/// separately so a failed row action can surface without hiding the rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListPhase {
    Loading,
    Empty { searching: bool },
    Populated,
}

pub struct ListStore<R: ListRecord> {
    records: Vec<R>,
    filtered: Vec<R>,
    search: String,
    sort: Option<SortSpec<R>>,
    pub loading: bool,
    /// Guards against double submission while a create/update is in flight.
    pub submitting: bool,
    pub error: Option<String>,
    pub success: Option<String>,
    pub create_open: bool,
    pub edit_open: bool,
    pub editing_id: Option<String>,
}

impl<R: ListRecord> Default for ListStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            filtered: Vec::new(),
            search: String::new(),
            sort: None,
            loading: true,
            submitting: false,
            error: None,
            success: None,
            create_open: false,
            edit_open: false,
            editing_id: None,
        }
    }
}

impl<R: ListRecord> ListStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filtered(&self) -> &[R] {
        &self.filtered
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> Option<(&'static str, bool)> {
        self.sort.map(|sort| (sort.column, sort.descending))
    }

    pub fn phase(&self) -> ListPhase {
        if self.loading {
            ListPhase::Loading
        } else if self.filtered.is_empty() {
            ListPhase::Empty {
                searching: !self.search.trim().is_empty(),
            }
        } else {
            ListPhase::Populated
        }
    }

    /// Context-sensitive empty-state message, distinguishing an empty store
    /// from an empty search result.
    pub fn empty_message(&self, noun: &str) -> String {
        if self.search.trim().is_empty() {
            format!("No {noun} found.")
        } else {
            format!("No {noun} found matching your search.")
        }
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Replaces the collection wholesale on success; clears it on failure so
    /// no stale rows outlive a failed reload.
    pub fn finish_load(&mut self, result: Result<Vec<R>, ServiceError>) {
        self.loading = false;

        match result {
            Ok(records) => {
                self.records = records;
                self.refilter();
            }
            Err(error) => {
                self.error = Some(error.to_string());
                self.records.clear();
                self.filtered.clear();
            }
        }
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.refilter();
    }

    fn refilter(&mut self) {
        let needle = self.search.trim().to_lowercase();

        self.filtered = if needle.is_empty() {
            self.records.clone()
        } else {
            self.records
                .iter()
                .filter(|record| record.matches(&needle))
                .cloned()
                .collect()
        };

        if let Some(sort) = self.sort {
            self.filtered.sort_by(sort.compare);
            if sort.descending {
                self.filtered.reverse();
            }
        }
    }

    /// Sorts the filtered view by the given column, flipping direction when
    /// the column is selected again.
    pub fn toggle_sort(&mut self, column: &'static str, compare: fn(&R, &R) -> Ordering) {
        self.sort = match self.sort {
            Some(sort) if sort.column == column => Some(SortSpec {
                descending: !sort.descending,
                ..sort
            }),
            _ => Some(SortSpec {
                column,
                descending: false,
                compare,
            }),
        };

        self.refilter();
    }

    pub fn open_create(&mut self) {
        self.create_open = true;
    }

    pub fn close_create(&mut self) {
        self.create_open = false;
    }

    pub fn open_edit(&mut self, id: Option<String>) {
        self.editing_id = id;
        self.edit_open = true;
    }

    pub fn close_edit(&mut self) {
        self.edit_open = false;
        self.editing_id = None;
    }

    pub fn begin_submit(&mut self) {
        self.submitting = true;
        self.error = None;
    }

    /// Create succeeded: close the dialog and clear the search term so the
    /// new record is visible once the reload lands.
    pub fn finish_create(&mut self, message: &str) {
        self.submitting = false;
        self.create_open = false;
        self.success = Some(message.to_string());
        self.search.clear();
        self.refilter();
    }

    pub fn finish_edit(&mut self, message: &str) {
        self.submitting = false;
        self.edit_open = false;
        self.editing_id = None;
        self.success = Some(message.to_string());
    }

    /// Submission failed: surface the error and leave the dialog open for
    /// correction.
    pub fn fail_submit(&mut self, error: ServiceError) {
        self.submitting = false;
        self.error = Some(error.to_string());
    }

    pub fn finish_delete(&mut self, message: &str) {
        self.success = Some(message.to_string());
    }

    /// A failed row action surfaces its error and leaves the collection
    /// exactly as it was.
    pub fn fail_action(&mut self, error: ServiceError) {
        self.error = Some(error.to_string());
    }
}
