use dioxus::prelude::*;

use crate::client::components::PlaceholderPage;
use crate::client::nav::PageKey;

#[component]
pub fn TeamsPage() -> Element {
    rsx!(
        PlaceholderPage {
            title: "Teams",
            page_key: Some(PageKey::Teams),
            message: "Teams collaboration features coming soon...",
        }
    )
}
