use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaArrowsRotate, FaMagnifyingGlass, FaPenToSquare, FaPlus, FaTrash,
};
use dioxus_free_icons::Icon;

use crate::client::components::{style, ErrorAlert, SuccessAlert};
use crate::client::config::AppConfig;
use crate::client::service::dataverse::ContactsService;
use crate::client::service::{submit_record, RecordService, ServiceError};
use crate::client::store::records::{compare_fields, row_key, sort_marker, ListPhase, ListStore};
use crate::client::util;
use crate::client::util::validation;
use crate::model::api::QueryOptions;
use crate::model::contact::{Contact, ContactDraft};

fn contacts_query() -> QueryOptions {
    QueryOptions::new()
        .select(&[
            "contactid",
            "fullname",
            "firstname",
            "lastname",
            "emailaddress1",
            "telephone1",
            "jobtitle",
        ])
        .order_by(&["fullname"])
        .top(100)
}

#[component]
fn ContactFormFields(form: Signal<ContactDraft>) -> Element {
    let mut form = form;
    let f = form.read();
    let email_error = validation::email_error(Some(&f.emailaddress1));

    rsx!(
        div { class: "flex flex-col gap-3 py-2",
            label { class: style::FIELD,
                span { class: "text-sm", "First Name" }
                input {
                    class: "input input-bordered w-full",
                    r#type: "text",
                    placeholder: "Enter first name",
                    value: "{f.firstname}",
                    oninput: move |event| form.write().firstname = event.value(),
                }
            }
            label { class: style::FIELD,
                span { class: "text-sm", "Last Name *" }
                input {
                    class: "input input-bordered w-full",
                    r#type: "text",
                    placeholder: "Enter last name",
                    value: "{f.lastname}",
                    oninput: move |event| form.write().lastname = event.value(),
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
                    value: "{f.telephone1}",
                    oninput: move |event| form.write().telephone1 = event.value(),
                }
            }
            label { class: style::FIELD,
                span { class: "text-sm", "Job Title" }
                input {
                    class: "input input-bordered w-full",
                    r#type: "text",
                    placeholder: "Enter job title",
                    value: "{f.jobtitle}",
                    oninput: move |event| form.write().jobtitle = event.value(),
                }
            }
        }
    )
}

#[component]
pub fn ContactsPage() -> Element {
    let config = use_context::<Signal<AppConfig>>();
    let mut store = use_signal(ListStore::<Contact>::new);
    let mut form = use_signal(ContactDraft::default);

    let load = move || {
        spawn(async move {
            store.write().begin_load();
            let service = ContactsService::new(&config());
            let result = service.get_all(&contacts_query()).await;
            store.write().finish_load(result);
        });
    };

    use_hook(move || load());

    let submit_create = move || {
        spawn(async move {
            let draft = form();
            store.write().begin_submit();
            let service = ContactsService::new(&config());
            match submit_record(&service, &draft, None).await {
                Ok(()) => {
                    store.write().finish_create("Contact created successfully");
                    form.set(ContactDraft::default());
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
                    .fail_submit(ServiceError::Validation("No contact selected".to_string()));
                return;
            };
            let draft = form();
            store.write().begin_submit();
            let service = ContactsService::new(&config());
            match submit_record(&service, &draft, Some(&id)).await {
                Ok(()) => {
                    store.write().finish_edit("Contact updated successfully");
                    form.set(ContactDraft::default());
                    load();
                }
                Err(error) => store.write().fail_submit(error),
            }
        });
    };

    let delete_contact = move |id: String| {
        if !util::confirm("Are you sure you want to delete this contact?") {
            return;
        }
        spawn(async move {
            let service = ContactsService::new(&config());
            match service.delete(&id).await {
                Ok(()) => {
                    store.write().finish_delete("Contact deleted successfully");
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
    let empty_message = s.empty_message("contacts");
    let sort = s.sort();
    let phase = s.phase();
    let name_marker = sort_marker(sort, "name");
    let email_marker = sort_marker(sort, "email");
    let phone_marker = sort_marker(sort, "phone");
    let jobtitle_marker = sort_marker(sort, "jobtitle");

    let grid = match phase {
        ListPhase::Loading => rsx!(
            div { class: "flex h-48 flex-col items-center justify-center gap-3",
                span { class: "loading loading-spinner loading-lg" }
                p { "Loading contacts..." }
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
                                onclick: move |_| store.write().toggle_sort("name", |a, b| compare_fields(&a.fullname, &b.fullname)),
                                "Name{name_marker}"
                            }
                            th {
                                class: "cursor-pointer select-none",
                                onclick: move |_| store.write().toggle_sort("email", |a, b| compare_fields(&a.emailaddress1, &b.emailaddress1)),
                                "Email{email_marker}"
                            }
                            th {
                                class: "cursor-pointer select-none",
                                onclick: move |_| store.write().toggle_sort("phone", |a, b| compare_fields(&a.telephone1, &b.telephone1)),
                                "Phone{phone_marker}"
                            }
                            th {
                                class: "cursor-pointer select-none",
                                onclick: move |_| store.write().toggle_sort("jobtitle", |a, b| compare_fields(&a.jobtitle, &b.jobtitle)),
                                "Job Title{jobtitle_marker}"
                            }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        {s.filtered().iter().map(|record| {
                            let key = row_key(record);
                            let fullname = record.fullname.clone().unwrap_or_else(|| "-".to_string());
                            let email = record.emailaddress1.clone().unwrap_or_else(|| "-".to_string());
                            let phone = record.telephone1.clone().unwrap_or_else(|| "-".to_string());
                            let jobtitle = record.jobtitle.clone().unwrap_or_else(|| "-".to_string());
                            let record_for_edit = record.clone();
                            let delete_id = record.contactid.clone().unwrap_or_default();

                            rsx!(
                                tr { key: "{key}",
                                    td { "{fullname}" }
                                    td { "{email}" }
                                    td { "{phone}" }
                                    td { "{jobtitle}" }
                                    td {
                                        div { class: "flex gap-1",
                                            button {
                                                class: "btn btn-ghost btn-xs",
                                                title: "Edit",
                                                onclick: move |_| {
                                                    form.set(ContactDraft::from_contact(&record_for_edit));
                                                    store.write().open_edit(record_for_edit.contactid.clone());
                                                },
                                                Icon { width: 14, height: 14, icon: FaPenToSquare }
                                            }
                                            button {
                                                class: "btn btn-ghost btn-xs text-error",
                                                title: "Delete",
                                                onclick: move |_| delete_contact(delete_id.clone()),
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

    let lastname_blank = form.read().lastname.trim().is_empty();

    rsx!(
        div { class: "flex h-full w-full flex-col overflow-hidden",
            div { class: "sticky top-0 z-10 flex flex-col gap-4 bg-base-100 px-6 pb-3 pt-5",
                h1 { class: "text-2xl font-semibold", "Contacts" }
                div { class: style::TOOLBAR,
                    div { class: "flex items-center gap-3",
                        label { class: "input input-bordered flex w-96 items-center gap-2",
                            Icon { width: 16, height: 16, icon: FaMagnifyingGlass }
                            input {
                                class: "grow",
                                r#type: "search",
                                placeholder: "Search contacts...",
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
                            form.set(ContactDraft::default());
                            store.write().open_create();
                        },
                        Icon { width: 14, height: 14, icon: FaPlus }
                        "New Contact"
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
                    h3 { class: "text-lg font-bold", "Create New Contact" }
                    ContactFormFields { form }
                    div { class: "modal-action",
                        button {
                            class: "btn",
                            onclick: move |_| store.write().close_create(),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary",
                            disabled: submitting || lastname_blank,
                            onclick: move |_| submit_create(),
                            if submitting { "Creating..." } else { "Create" }
                        }
                    }
                }
            }

            // Edit dialog
            div { class: if edit_open { "modal modal-open" } else { "modal" },
                div { class: "modal-box",
                    h3 { class: "text-lg font-bold", "Edit Contact" }
                    ContactFormFields { form }
                    div { class: "modal-action",
                        button {
                            class: "btn",
                            onclick: move |_| store.write().close_edit(),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary",
                            disabled: submitting || lastname_blank,
                            onclick: move |_| submit_edit(),
                            if submitting { "Updating..." } else { "Update" }
                        }
                    }
                }
            }
        }
    )
}
