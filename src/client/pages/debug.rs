use chrono::Local;
use dioxus::prelude::*;

use crate::client::components::style;
use crate::client::config::AppConfig;
use crate::client::service::dataverse::{
    ContactsService, ACCOUNTS_ENTITY_SET, CONTACTS_ENTITY_SET,
};
use crate::client::service::office365::Office365Client;
use crate::client::service::{ProfileService, RecordService};
use crate::client::util::debug_json;
use crate::model::api::QueryOptions;

/// Connectivity troubleshooting page: invokes the same read-all call as the
/// contacts screen plus the profile read, and dumps the raw results.
#[component]
pub fn DebugPage() -> Element {
    let config = use_context::<Signal<AppConfig>>();
    let mut running = use_signal(|| false);
    let mut result_json = use_signal(String::new);
    let mut o365_json = use_signal(String::new);
    let mut last_run = use_signal(String::new);

    let runtime_json = use_hook(|| {
        let cfg = config();

        debug_json::pretty(&serde_json::json!({
            "dataverseRoot": cfg.dataverse_root,
            "connectorsRoot": cfg.connectors_root,
            "persistAlignment": cfg.persist_alignment,
            "entitySets": [ACCOUNTS_ENTITY_SET, CONTACTS_ENTITY_SET],
        }))
    });

    let run = move || {
        spawn(async move {
            running.set(true);
            result_json.set(String::new());
            o365_json.set(String::new());
            last_run.set(Local::now().format("%Y-%m-%d %H:%M:%S").to_string());

            // No options on purpose: exactly the call being validated.
            let result = ContactsService::new(&config())
                .get_all(&QueryOptions::new())
                .await;
            result_json.set(debug_json::render_result(&result));

            let profile = Office365Client::new(&config()).my_profile().await;
            o365_json.set(debug_json::render_result(&profile));

            running.set(false);
        });
    };

    use_hook(move || run());

    let is_running = running();
    let raw = result_json();
    let result_view = if raw.is_empty() {
        if is_running { "Loading...".to_string() } else { "No result yet".to_string() }
    } else {
        raw
    };
    let o365_raw = o365_json();
    let o365_view = if o365_raw.is_empty() {
        "Loading...".to_string()
    } else {
        o365_raw
    };
    let stamp = last_run();

    rsx!(
        div { class: "flex h-full w-full flex-col overflow-auto",
            div { class: "sticky top-0 z-10 flex items-center justify-between bg-base-100 px-6 py-4",
                h1 { class: "text-2xl font-semibold", "Dataverse Debug" }
                div { class: "flex items-center gap-2",
                    if is_running {
                        span { class: "loading loading-spinner loading-xs" }
                    }
                    button {
                        class: "btn btn-primary btn-sm",
                        disabled: is_running,
                        onclick: move |_| run(),
                        if is_running { "Running..." } else { "Run" }
                    }
                }
            }
            div { class: "flex flex-col gap-4 px-6 pb-6",
                p { class: "text-sm opacity-80",
                    "This page invokes the record service directly to help diagnose connectivity."
                }
                div {
                    h2 { class: "text-lg font-semibold", "Runtime Status" }
                    pre { class: style::JSON_BLOCK, "{runtime_json}" }
                }
                div {
                    h2 { class: "text-lg font-semibold", "Calling" }
                    pre { class: style::JSON_BLOCK,
                        "ContactsService::new(&config).get_all(&QueryOptions::new()).await"
                    }
                    if !stamp.is_empty() {
                        p { class: "mt-2 text-sm opacity-70", "Last run: {stamp}" }
                    }
                }
                div {
                    h2 { class: "text-lg font-semibold", "Raw Result" }
                    pre { class: style::JSON_BLOCK, "{result_view}" }
                }
                div {
                    h2 { class: "text-lg font-semibold", "Office 365 Connector Check" }
                    pre { class: style::JSON_BLOCK, "{o365_view}" }
                }
            }
        }
    )
}
