use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaAddressBook, FaBug, FaBuilding, FaComment, FaGear, FaHouse, FaTableCellsLarge, FaUsers,
};
use dioxus_free_icons::Icon;

use crate::client::nav::{PageKey, NAV_ITEMS};
use crate::client::store::page::PageStore;

#[component]
fn NavIcon(page: PageKey) -> Element {
    match page {
        PageKey::Home => rsx!(Icon { width: 20, height: 20, icon: FaHouse }),
        PageKey::Chat => rsx!(Icon { width: 20, height: 20, icon: FaComment }),
        PageKey::Teams => rsx!(Icon { width: 20, height: 20, icon: FaUsers }),
        PageKey::Apps => rsx!(Icon { width: 20, height: 20, icon: FaTableCellsLarge }),
        PageKey::Contacts => rsx!(Icon { width: 20, height: 20, icon: FaAddressBook }),
        PageKey::Accounts => rsx!(Icon { width: 20, height: 20, icon: FaBuilding }),
        PageKey::Settings => rsx!(Icon { width: 20, height: 20, icon: FaGear }),
        PageKey::Debug => rsx!(Icon { width: 20, height: 20, icon: FaBug }),
    }
}

/// Fixed vertical rail with one entry per page key.
#[component]
pub fn Sidebar() -> Element {
    let mut page = use_context::<Signal<PageStore>>();
    let current = page.read().current().to_string();

    let buttons = NAV_ITEMS.into_iter().map(|key| {
        let label = key.label();
        let active = current == key.as_str();

        rsx!(
            button {
                key: "{label}",
                class: if active {
                    "btn btn-ghost btn-sm h-14 w-14 flex-col gap-1 text-[10px] font-normal text-primary"
                } else {
                    "btn btn-ghost btn-sm h-14 w-14 flex-col gap-1 text-[10px] font-normal"
                },
                onclick: move |_| page.write().change(key.as_str()),
                NavIcon { page: key }
                span { "{label}" }
            }
        )
    });

    rsx!(
        nav { class: "flex w-16 flex-col items-center gap-1 border-r border-base-300 bg-base-200 px-1 py-2",
            {buttons}
        }
    )
}
