use dioxus::prelude::*;

use crate::client::components::PlaceholderPage;
use crate::client::nav::PageKey;

#[component]
pub fn ChatPage() -> Element {
    rsx!(
        PlaceholderPage {
            title: "Chat",
            page_key: Some(PageKey::Chat),
            message: "Chat functionality coming soon...",
        }
    )
}
