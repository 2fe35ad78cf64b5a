use dioxus::prelude::*;

use crate::client::util::validation;
use crate::model::profile::UserProfile;

/// Avatar with a details popover for the signed-in user. Shows the photo
/// when one was fetched and falls back to initials otherwise.
#[component]
pub fn UserBadge(profile: UserProfile, photo: Option<String>) -> Element {
    let display_name = profile
        .display_name
        .clone()
        .unwrap_or_else(|| "Unknown user".to_string());
    let mail = profile.mail.clone().unwrap_or_default();
    let initials = validation::initials(&profile);

    rsx!(
        div { class: "dropdown dropdown-end",
            button { class: "btn btn-circle btn-ghost avatar", title: "{display_name}",
                if let Some(photo) = photo.clone() {
                    div { class: "w-8 rounded-full",
                        img {
                            src: "data:image/jpeg;base64,{photo}",
                            alt: "{display_name}",
                        }
                    }
                } else {
                    div { class: "flex h-8 w-8 items-center justify-center rounded-full bg-primary text-sm text-primary-content",
                        "{initials}"
                    }
                }
            }
            div { class: "dropdown-content card z-20 mt-2 w-72 bg-base-200 p-4 shadow",
                div { class: "flex items-center gap-3",
                    if let Some(photo) = photo {
                        div { class: "avatar",
                            div { class: "w-12 rounded-full",
                                img {
                                    src: "data:image/jpeg;base64,{photo}",
                                    alt: "{display_name}",
                                }
                            }
                        }
                    }
                    div { class: "min-w-0",
                        p { class: "truncate font-semibold", "{display_name}" }
                        if !mail.is_empty() {
                            p { class: "truncate text-sm opacity-70", "{mail}" }
                        }
                    }
                }
            }
        }
    )
}
