use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaArrowsRotate, FaMagnifyingGlass, FaPenToSquare, FaPlus, FaTrash,
};
use dioxus_free_icons::Icon;

use crate::client::components::{style, ErrorAlert, SuccessAlert};
use crate::client::config::AppConfig;
use crate::client::service::dataverse::AccountsService;
use crate::client::service::{submit_record, RecordService, ServiceError};
use crate::client::store::records::{compare_fields, row_key, sort_marker, ListPhase, ListStore};
use crate::client::util;
use crate::client::util::validation;
use crate::model::account::{Account, AccountDraft};
use crate::model::api::QueryOptions;

fn accounts_query() -> QueryOptions {
    QueryOptions::new()
        .select(&[
            "accountid",
            "name",
            "accountnumber",
            "emailaddress1",
            "address1_telephone1",
            "websiteurl",
        ])
        .order_by(&["name"])
        .top(100)
}

#[component]
fn AccountFormFields(form: Signal<AccountDraft>) -> Element {
    let mut form = form;
    let f = form.read();
    let email_error = validation::email_error(Some(&f.emailaddress1));

    rsx!(
        div { class: "flex flex-col gap-3 py-2",
            label { class: style::FIELD,
                span { class: "text-sm", "Account Name *" }
                input {
                    class: "input input-bordered w-full",
                    r#type: "text",
                    placeholder: "Enter account name",
                    value: "{f.name}",
                    oninput: move |event| form.write().name = event.value(),
                }
            }
            label { class: style::FIELD,
                span { class: "text-sm", "Account Number" }
                input {
                    class: "input input-bordered w-full",
                    r#type: "text",
                    placeholder: "Enter account number",
                    value: "{f.accountnumber}",
                    oninput: move |event| form.write().accountnumber = event.value(),
                }
            }
            label { class: style::FIELD,
                span { class: "text-sm", "Email" }
                input {
                    class: "input input-bordered w-full",
                    r#type: "email",
                    placeholder: "Enter email address",
                    value: "{f.emailaddress1}",
                    oninput: move |event| form.write().emailaddress1 = event.value(),
                }
                if let Some(message) = email_error {
                    span { class: "text-xs text-error", "{message}" }
                }
            }
            label { class: style::FIELD,
                span { class: "text-sm", "Phone" }
                input {
                    class: "input input-bordered w-full",
                    r#type: "tel",
                    placeholder: "Enter phone number",
                    value: "{f.address1_telephone1}",
                    oninput: move |event| form.write().address1_telephone1 = event.value(),
                }
            }
            label { class: style::FIELD,
                span { class: "text-sm", "Website" }
                input {
                    class: "input input-bordered w-full",
                    r#type: "url",
                    placeholder: "Enter website",
                    value: "{f.websiteurl}",
                    oninput: move |event| form.write().websiteurl = event.value(),
                }
            }
        }
    )
}

#[component]
pub fn AccountsPage() -> Element {
    let config = use_context::<Signal<AppConfig>>();
    let mut store = use_signal(ListStore::<Account>::new);
    let mut form = use_signal(AccountDraft::default);

    let load = move || {
        spawn(async move {
            store.write().begin_load();
            let service = AccountsService::new(&config());
            let result = service.get_all(&accounts_query()).await;
            store.write().finish_load(result);
        });
    };

    use_hook(move || load());

    let submit_create = move || {
        spawn(async move {
            let draft = form();
            store.write().begin_submit();
            let service = AccountsService::new(&config());
            match submit_record(&service, &draft, None).await {
                Ok(()) => {
                    store.write().finish_create("Account created successfully");
                    form.set(AccountDraft::default());
                    load();
                }
                Err(error) => store.write().fail_submit(error),
            }
        });
    };

    let submit_edit = move || {
        spawn(async move {
            let target = store.read().editing_id.clone();
            let Some(id) = target else {
                store
                    .write()
                    .fail_submit(ServiceError::Validation("No account selected".to_string()));
                return;
            };
            let draft = form();
            store.write().begin_submit();
            let service = AccountsService::new(&config());
            match submit_record(&service, &draft, Some(&id)).await {
                Ok(()) => {
                    store.write().finish_edit("Account updated successfully");
                    form.set(AccountDraft::default());
                    load();
                }
                Err(error) => store.write().fail_submit(error),
            }
        });
    };

    let delete_account = move |id: String| {
        if !util::confirm("Are you sure you want to delete this account?") {
            return;
        }
        spawn(async move {
            let service = AccountsService::new(&config());
            match service.delete(&id).await {
                Ok(()) => {
                    store.write().finish_delete("Account deleted successfully");
                    load();
                }
                Err(error) => store.write().fail_action(error),
            }
        });
    };

    let s = store.read();
    let search_term = s.search().to_string();
    let error = s.error.clone();
    let success = s.success.clone();
    let loading = s.loading;
    let submitting = s.submitting;
    let create_open = s.create_open;
    let edit_open = s.edit_open;
    let empty_message = s.empty_message("accounts");
    let sort = s.sort();
    let phase = s.phase();
    let name_marker = sort_marker(sort, "name");
    let number_marker = sort_marker(sort, "accountnumber");
    let email_marker = sort_marker(sort, "email");
    let phone_marker = sort_marker(sort, "phone");
    let website_marker = sort_marker(sort, "website");

    let grid = match phase {
        ListPhase::Loading => rsx!(
            div { class: "flex h-48 flex-col items-center justify-center gap-3",
                span { class: "loading loading-spinner loading-lg" }
                p { "Loading accounts..." }
            }
        ),
        ListPhase::Empty { .. } => rsx!(
            div { class: style::EMPTY_STATE,
                p { "{empty_message}" }
            }
        ),
        ListPhase::Populated => rsx!(
            div { class: style::GRID_WRAPPER,
                table { class: "table table-md",
                    thead {
                        tr {
                            th {
                                class: "cursor-pointer select-none",
                                onclick: move |_| store.write().toggle_sort("name", |a, b| compare_fields(&a.name, &b.name)),
                                "Name{name_marker}"
                            }
                            th {
                                class: "cursor-pointer select-none",
                                onclick: move |_| store.write().toggle_sort("accountnumber", |a, b| compare_fields(&a.accountnumber, &b.accountnumber)),
                                "Account Number{number_marker}"
                            }
                            th {
                                class: "cursor-pointer select-none",
                                onclick: move |_| store.write().toggle_sort("email", |a, b| compare_fields(&a.emailaddress1, &b.emailaddress1)),
                                "Email{email_marker}"
                            }
                            th {
                                class: "cursor-pointer select-none",
                                onclick: move |_| store.write().toggle_sort("phone", |a, b| compare_fields(&a.address1_telephone1, &b.address1_telephone1)),
                                "Phone{phone_marker}"
                            }
                            th {
                                class: "cursor-pointer select-none",
                                onclick: move |_| store.write().toggle_sort("website", |a, b| compare_fields(&a.websiteurl, &b.websiteurl)),
                                "Website{website_marker}"
                            }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        {s.filtered().iter().map(|record| {
                            let key = row_key(record);
                            let name = record.name.clone().unwrap_or_else(|| "-".to_string());
                            let number = record.accountnumber.clone().unwrap_or_else(|| "-".to_string());
                            let email = record.emailaddress1.clone().unwrap_or_else(|| "-".to_string());
                            let phone = record.address1_telephone1.clone().unwrap_or_else(|| "-".to_string());
                            let website = record.websiteurl.clone().unwrap_or_else(|| "-".to_string());
                            let record_for_edit = record.clone();
                            let delete_id = record.accountid.clone().unwrap_or_default();

                            rsx!(
                                tr { key: "{key}",
                                    td { "{name}" }
                                    td { "{number}" }
                                    td { "{email}" }
                                    td { "{phone}" }
                                    td { "{website}" }
                                    td {
                                        div { class: "flex gap-1",
                                            button {
                                                class: "btn btn-ghost btn-xs",
                                                title: "Edit",
                                                onclick: move |_| {
                                                    form.set(AccountDraft::from_account(&record_for_edit));
                                                    store.write().open_edit(record_for_edit.accountid.clone());
                                                },
                                                Icon { width: 14, height: 14, icon: FaPenToSquare }
                                            }
                                            button {
                                                class: "btn btn-ghost btn-xs text-error",
                                                title: "Delete",
                                                onclick: move |_| delete_account(delete_id.clone()),
                                                Icon { width: 14, height: 14, icon: FaTrash }
                                            }
                                        }
                                    }
                                }
                            )
                        })}
                    }
                }
            }
        ),
    };

    let name_blank = form.read().name.trim().is_empty();

    rsx!(
        div { class: "flex h-full w-full flex-col overflow-hidden",
            div { class: "sticky top-0 z-10 flex flex-col gap-4 bg-base-100 px-6 pb-3 pt-5",
                h1 { class: "text-2xl font-semibold", "Accounts" }
                div { class: style::TOOLBAR,
                    div { class: "flex items-center gap-3",
                        label { class: "input input-bordered flex w-96 items-center gap-2",
                            Icon { width: 16, height: 16, icon: FaMagnifyingGlass }
                            input {
                                class: "grow",
                                r#type: "search",
                                placeholder: "Search accounts...",
                                value: "{search_term}",
                                oninput: move |event| store.write().set_search(event.value()),
                            }
                        }
                        button {
                            class: "btn btn-ghost btn-sm",
                            title: "Refresh",
                            disabled: loading,
                            onclick: move |_| load(),
                            Icon { width: 16, height: 16, icon: FaArrowsRotate }
                        }
                    }
                    button {
                        class: "btn btn-primary btn-sm",
                        onclick: move |_| {
                            form.set(AccountDraft::default());
                            store.write().open_create();
                        },
                        Icon { width: 14, height: 14, icon: FaPlus }
                        "New Account"
                    }
                }
                if let Some(message) = error {
                    ErrorAlert { message }
                }
                if let Some(message) = success {
                    SuccessAlert { message }
                }
            }
            div { class: "min-h-0 flex-1 overflow-auto px-6 pb-6",
                {grid}
            }

            // Create dialog
            div { class: if create_open { "modal modal-open" } else { "modal" },
                div { class: "modal-box",
                    h3 { class: "text-lg font-bold", "Create New Account" }
                    AccountFormFields { form }
                    div { class: "modal-action",
                        button {
                            class: "btn",
                            onclick: move |_| store.write().close_create(),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary",
                            disabled: submitting || name_blank,
                            onclick: move |_| submit_create(),
                            if submitting { "Creating..." } else { "Create" }
                        }
                    }
                }
            }

            // Edit dialog
            div { class: if edit_open { "modal modal-open" } else { "modal" },
                div { class: "modal-box",
                    h3 { class: "text-lg font-bold", "Edit Account" }
                    AccountFormFields { form }
                    div { class: "modal-action",
                        button {
                            class: "btn",
                            onclick: move |_| store.write().close_edit(),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary",
                            disabled: submitting || name_blank,
                            onclick: move |_| submit_edit(),
                            if submitting { "Updating..." } else { "Update" }
                        }
                    }
                }
            }
        }
    )
}
