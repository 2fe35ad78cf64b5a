use dioxus::prelude::*;

use crate::client::components::{style, BasePage};
use crate::client::nav::PageKey;
use crate::client::store::theme::ThemeStore;

#[component]
pub fn SettingsPage() -> Element {
    let mut theme = use_context::<Signal<ThemeStore>>();
    let is_dark = theme.read().mode().is_dark();

    rsx!(
        BasePage { title: "Settings", page_key: Some(PageKey::Settings),
            div { class: style::CARD,
                div { class: "card-body",
                    h2 { class: "card-title", "Appearance" }
                    label { class: "flex cursor-pointer items-center justify-between gap-4",
                        span { "Dark theme" }
                        input {
                            r#type: "checkbox",
                            class: "toggle",
                            checked: is_dark,
                            onchange: move |_| theme.write().toggle(),
                        }
                    }
                }
            }
            p { class: "opacity-70", "Application settings and configuration options..." }
        }
    )
}
