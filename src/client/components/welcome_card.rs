use dioxus::prelude::*;

use crate::client::app::CounterState;
use crate::client::components::style;

#[component]
pub fn WelcomeCard() -> Element {
    rsx!(
        div { class: style::CARD,
            div { class: "card-body",
                h2 { class: "card-title", "Welcome to your Dataverse workspace" }
                p { class: "text-sm opacity-80",
                    "A Teams-styled shell over Dataverse records and Office 365 services. "
                    "Browse contacts and accounts from the rail, or open Debug to check connectivity."
                }
            }
        }
    )
}

/// Session-scoped counter card; the count lives above the page switch so it
/// survives navigating away and back.
#[component]
pub fn InteractiveCounter() -> Element {
    let mut counter = use_context::<CounterState>();

    rsx!(
        div { class: style::CARD,
            div { class: "card-body items-center text-center",
                h2 { class: "card-title", "Interactive Counter" }
                p { class: "text-sm opacity-80", "Test reactivity with this simple counter." }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| counter.0 += 1,
                    "Count is {counter.0}"
                }
            }
        }
    )
}
