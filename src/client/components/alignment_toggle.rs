use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaAlignCenter, FaAlignLeft};
use dioxus_free_icons::Icon;

use crate::client::nav::PageKey;
use crate::client::store::alignment::{AlignmentStore, PageAlignment};

#[component]
pub fn AlignmentToggle(page_key: PageKey) -> Element {
    let mut alignment = use_context::<Signal<AlignmentStore>>();
    let current = alignment.read().get(page_key.as_str());
    let tooltip = match current {
        PageAlignment::Center => "Switch to left alignment",
        PageAlignment::Left => "Switch to center alignment",
    };

    rsx!(
        button {
            class: "btn btn-ghost btn-sm",
            title: tooltip,
            onclick: move |_| alignment.write().toggle(page_key.as_str()),
            if current == PageAlignment::Center {
                Icon { width: 18, height: 18, icon: FaAlignCenter }
            } else {
                Icon { width: 18, height: 18, icon: FaAlignLeft }
            }
        }
    )
}
