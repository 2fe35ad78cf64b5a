use dioxus::prelude::*;

use crate::client::components::{BasePage, ErrorAlert, InteractiveCounter, WelcomeCard};
use crate::client::nav::PageKey;
use crate::client::store::profile::ProfileState;

#[component]
pub fn HomePage() -> Element {
    let profile = use_context::<Resource<ProfileState>>();
    let error = match &*profile.read_unchecked() {
        Some(ProfileState::Failed(message)) => Some(message.clone()),
        _ => None,
    };

    rsx!(
        BasePage { title: "Home", page_key: Some(PageKey::Home),
            if let Some(message) = error {
                ErrorAlert { message }
            }
            WelcomeCard {}
            InteractiveCounter {}
        }
    )
}
