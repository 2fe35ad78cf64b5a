use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::components::{Sidebar, TitleBar};
use crate::client::config::AppConfig;
use crate::client::nav::{render_page, validate_navigation};
use crate::client::service::office365::Office365Client;
use crate::client::store::alignment::AlignmentStore;
use crate::client::store::page::PageStore;
use crate::client::store::profile::load_user_profile;
use crate::client::store::storage;
use crate::client::store::theme::ThemeStore;

/// Session-scoped counter shown on the home page; owned here so it survives
/// page switches.
#[derive(Clone, Copy)]
pub struct CounterState(pub Signal<i32>);

/// Root component: owns the persisted UI stores and the one-shot profile
/// load, and dispatches the active page inside the themed shell.
#[component]
pub fn App() -> Element {
    let storage = use_hook(storage::browser);
    let config = use_context_provider(|| Signal::new(AppConfig::default()));

    let theme = use_context_provider({
        let storage = storage.clone();
        move || Signal::new(ThemeStore::new(storage))
    });
    let page = use_context_provider({
        let storage = storage.clone();
        move || Signal::new(PageStore::new(storage))
    });
    use_context_provider(move || {
        Signal::new(AlignmentStore::new(
            storage,
            config.read().persist_alignment,
        ))
    });
    use_context_provider(|| CounterState(Signal::new(0)));

    let profile =
        use_resource(move || async move { load_user_profile(&Office365Client::new(&config())).await });
    use_context_provider(|| profile);

    use_hook(|| {
        if let Err(error) = validate_navigation() {
            tracing::error!("{error}");
        }
    });

    let theme_name = theme.read().mode().theme_name();
    let current = page.read().current().to_string();

    rsx!(
        div {
            class: "flex h-screen w-screen flex-col overflow-hidden bg-base-100 text-base-content",
            "data-theme": "{theme_name}",
            TitleBar {}
            div { class: "flex min-h-0 flex-1",
                Sidebar {}
                main { class: "flex min-w-0 flex-1 flex-col overflow-auto",
                    {render_page(&current)}
                }
            }
        }
    )
}
