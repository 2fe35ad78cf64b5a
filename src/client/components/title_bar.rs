use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMoon, FaSun};
use dioxus_free_icons::Icon;

use crate::client::components::UserBadge;
use crate::client::store::profile::ProfileState;
use crate::client::store::theme::ThemeStore;

/// Top bar with the app title, the theme toggle, and the profile summary.
#[component]
pub fn TitleBar() -> Element {
    let mut theme = use_context::<Signal<ThemeStore>>();
    let profile = use_context::<Resource<ProfileState>>();

    let is_dark = theme.read().mode().is_dark();
    let tooltip = if is_dark {
        "Switch to light theme"
    } else {
        "Switch to dark theme"
    };

    let profile_view = match &*profile.read_unchecked() {
        None => rsx!(span { class: "loading loading-spinner loading-xs" }),
        Some(ProfileState::Ready { profile, photo }) => rsx!(UserBadge {
            profile: profile.clone(),
            photo: photo.clone(),
        }),
        Some(ProfileState::Failed(_)) => rsx!(span { class: "text-sm text-error", "Profile unavailable" }),
    };

    rsx!(
        div { class: "flex min-h-12 items-center justify-between border-b border-base-300 bg-base-200 px-5",
            div { class: "flex min-w-0 items-center gap-3",
                p { class: "truncate text-lg font-semibold", "Workhub" }
                p { class: "text-xs opacity-70", "Dataverse workspace" }
            }
            div { class: "flex shrink-0 items-center gap-4",
                button {
                    class: "btn btn-ghost btn-sm",
                    title: tooltip,
                    onclick: move |_| theme.write().toggle(),
                    if is_dark {
                        Icon { width: 20, height: 20, icon: FaSun }
                    } else {
                        Icon { width: 20, height: 20, icon: FaMoon }
                    }
                }
                {profile_view}
            }
        }
    )
}
