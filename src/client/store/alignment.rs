use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::client::store::storage::{SharedStorage, ALIGNMENT_KEY};

/// Horizontal placement of a page's content block. Only these two values are
/// ever produced; the toggle flips between them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageAlignment {
    Center,
    Left,
}

impl PageAlignment {
    pub fn toggled(self) -> Self {
        match self {
            Self::Center => Self::Left,
            Self::Left => Self::Center,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Left => "left",
        }
    }

    /// Flex alignment class for the page content column.
    pub fn items_class(self) -> &'static str {
        match self {
            Self::Center => "items-center",
            Self::Left => "items-start",
        }
    }
}

/// Per-page alignment preferences.
///
/// Unknown keys read as center. Persistence across sessions is decided by
/// the `persist` flag from configuration; when off the registry lives and
/// dies with the session.
pub struct AlignmentStore {
    alignments: HashMap<String, PageAlignment>,
    storage: SharedStorage,
    persist: bool,
}

impl AlignmentStore {
    fn defaults() -> HashMap<String, PageAlignment> {
        [
            ("Home", PageAlignment::Center),
            ("Chat", PageAlignment::Left),
            ("Teams", PageAlignment::Left),
            ("Apps", PageAlignment::Center),
            ("Settings", PageAlignment::Left),
        ]
        .into_iter()
        .map(|(key, alignment)| (key.to_string(), alignment))
        .collect()
    }

    pub fn new(storage: SharedStorage, persist: bool) -> Self {
        let mut alignments = Self::defaults();

        if persist {
            if let Some(raw) = storage.get(ALIGNMENT_KEY) {
                if let Ok(saved) = serde_json::from_str::<HashMap<String, PageAlignment>>(&raw) {
                    alignments.extend(saved);
                }
            }
        }

        Self {
            alignments,
            storage,
            persist,
        }
    }

    pub fn get(&self, key: &str) -> PageAlignment {
        self.alignments
            .get(key)
            .copied()
            .unwrap_or(PageAlignment::Center)
    }

    pub fn set(&mut self, key: &str, alignment: PageAlignment) {
        self.alignments.insert(key.to_string(), alignment);

        if self.persist {
            if let Ok(raw) = serde_json::to_string(&self.alignments) {
                self.storage.set(ALIGNMENT_KEY, &raw);
            }
        }
    }

    pub fn toggle(&mut self, key: &str) {
        self.set(key, self.get(key).toggled());
    }
}
