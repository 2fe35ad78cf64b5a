use dioxus::prelude::*;

use crate::client::components::PlaceholderPage;
use crate::client::nav::PageKey;

#[component]
pub fn AppsPage() -> Element {
    rsx!(
        PlaceholderPage {
            title: "Apps",
            page_key: Some(PageKey::Apps),
            message: "Workspace applications will be displayed here...",
        }
    )
}
