//! Page keys, the navigation rail contents, and the page dispatch table.

use dioxus::prelude::*;

use crate::client::pages::{
    AccountsPage, AppsPage, ChatPage, ContactsPage, DebugPage, HomePage, NotFoundPage,
    SettingsPage, TeamsPage,
};

/// The closed set of screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKey {
    Home,
    Chat,
    Teams,
    Apps,
    Contacts,
    Accounts,
    Settings,
    Debug,
}

impl PageKey {
    pub const ALL: [PageKey; 8] = [
        PageKey::Home,
        PageKey::Chat,
        PageKey::Teams,
        PageKey::Apps,
        PageKey::Contacts,
        PageKey::Accounts,
        PageKey::Settings,
        PageKey::Debug,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Chat => "Chat",
            Self::Teams => "Teams",
            Self::Apps => "Apps",
            Self::Contacts => "Contacts",
            Self::Accounts => "Accounts",
            Self::Settings => "Settings",
            Self::Debug => "Debug",
        }
    }

    pub fn label(self) -> &'static str {
        self.as_str()
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.as_str() == key)
    }
}

/// Rail entries, mapped 1:1 to page keys.
pub const NAV_ITEMS: [PageKey; 8] = PageKey::ALL;

struct PageEntry {
    key: PageKey,
    render: fn() -> Element,
}

/// Declarative dispatch table; rendering a key outside it falls back to the
/// not-found view.
static PAGE_TABLE: &[PageEntry] = &[
    PageEntry {
        key: PageKey::Home,
        render: || rsx! { HomePage {} },
    },
    PageEntry {
        key: PageKey::Chat,
        render: || rsx! { ChatPage {} },
    },
    PageEntry {
        key: PageKey::Teams,
        render: || rsx! { TeamsPage {} },
    },
    PageEntry {
        key: PageKey::Apps,
        render: || rsx! { AppsPage {} },
    },
    PageEntry {
        key: PageKey::Contacts,
        render: || rsx! { ContactsPage {} },
    },
    PageEntry {
        key: PageKey::Accounts,
        render: || rsx! { AccountsPage {} },
    },
    PageEntry {
        key: PageKey::Settings,
        render: || rsx! { SettingsPage {} },
    },
    PageEntry {
        key: PageKey::Debug,
        render: || rsx! { DebugPage {} },
    },
];

fn lookup(key: &str) -> Option<&'static PageEntry> {
    let key = PageKey::parse(key)?;

    PAGE_TABLE.iter().find(|entry| entry.key == key)
}

pub fn render_page(key: &str) -> Element {
    match lookup(key) {
        Some(entry) => (entry.render)(),
        None => rsx! {
            NotFoundPage {}
        },
    }
}

/// Startup check that every rail entry is dispatchable, preventing silent
/// not-found regressions when pages are renamed.
pub fn validate_navigation() -> Result<(), String> {
    for key in NAV_ITEMS {
        if !PAGE_TABLE.iter().any(|entry| entry.key == key) {
            return Err(format!(
                "navigation entry {} has no page registered",
                key.as_str()
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect every rail entry to resolve to a registered page
    #[test]
    fn rail_keys_are_a_subset_of_the_dispatch_table() {
        assert_eq!(validate_navigation(), Ok(()));
    }

    /// Expect known keys to round-trip through parse
    #[test]
    fn parse_round_trips_known_keys() {
        for key in PageKey::ALL {
            assert_eq!(PageKey::parse(key.as_str()), Some(key));
        }
    }

    /// Expect unknown keys to fall outside the dispatch table
    #[test]
    fn unknown_keys_have_no_entry() {
        assert_eq!(PageKey::parse("Bogus"), None);
        assert!(lookup("Bogus").is_none());
    }

    /// Expect every known key to have a dispatch entry
    #[test]
    fn known_keys_have_entries() {
        for key in PageKey::ALL {
            assert!(lookup(key.as_str()).is_some());
        }
    }
}
