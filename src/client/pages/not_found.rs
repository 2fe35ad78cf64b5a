use dioxus::prelude::*;

#[component]
pub fn NotFoundPage() -> Element {
    rsx!(
        div { class: "flex h-full items-center justify-center",
            p { class: "text-lg opacity-70", "Page not found" }
        }
    )
}
