use dioxus::prelude::*;

use crate::client::components::AlignmentToggle;
use crate::client::nav::PageKey;
use crate::client::store::alignment::AlignmentStore;

/// Sticky page title over an alignment-aware content column. Pages that pass
/// their key get the alignment toggle in the header; the content column is
/// always top-aligned, never vertically centered.
#[component]
pub fn BasePage(title: String, page_key: Option<PageKey>, children: Element) -> Element {
    let alignment = use_context::<Signal<AlignmentStore>>();
    let items = match page_key {
        Some(key) => alignment.read().get(key.as_str()).items_class(),
        None => "items-center",
    };

    rsx!(
        div { class: "flex h-full w-full flex-col overflow-x-hidden",
            div { class: "sticky top-0 z-10 flex items-center justify-between bg-base-100 px-6 pb-3 pt-5",
                h1 { class: "text-2xl font-semibold", "{title}" }
                if let Some(key) = page_key {
                    AlignmentToggle { page_key: key }
                }
            }
            div { class: "flex flex-1 flex-col gap-6 overflow-y-auto px-6 pb-5 {items}",
                {children}
            }
        }
    )
}

#[component]
pub fn PlaceholderPage(title: String, page_key: Option<PageKey>, message: String) -> Element {
    rsx!(
        BasePage { title, page_key,
            p { class: "text-base opacity-80", "{message}" }
        }
    )
}
