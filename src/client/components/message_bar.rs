use dioxus::prelude::*;

#[component]
pub fn ErrorAlert(message: String) -> Element {
    rsx!(
        div { class: "alert alert-error py-2", role: "alert",
            p { class: "text-sm", "{message}" }
        }
    )
}

#[component]
pub fn SuccessAlert(message: String) -> Element {
    rsx!(
        div { class: "alert alert-success py-2", role: "status",
            p { class: "text-sm", "{message}" }
        }
    )
}
