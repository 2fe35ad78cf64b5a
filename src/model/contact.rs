use serde::{Deserialize, Serialize};

/// A contact row as returned by the record store.
///
/// Field names are the store's schema and are kept verbatim on the wire and
/// in code; the store owns these records and this application only caches
/// them between reloads.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub contactid: Option<String>,
    #[serde(default)]
    pub fullname: Option<String>,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub emailaddress1: Option<String>,
    #[serde(default)]
    pub telephone1: Option<String>,
    #[serde(default)]
    pub jobtitle: Option<String>,
}

/// The writable contact fields, used both as the dialog form buffer and as
/// the create/update payload. `fullname` is computed by the store and never
/// sent.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactDraft {
    pub firstname: String,
    pub lastname: String,
    pub emailaddress1: String,
    pub telephone1: String,
    pub jobtitle: String,
}

impl ContactDraft {
    /// Pre-fills the form from an existing record's current field values.
    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            firstname: contact.firstname.clone().unwrap_or_default(),
            lastname: contact.lastname.clone().unwrap_or_default(),
            emailaddress1: contact.emailaddress1.clone().unwrap_or_default(),
            telephone1: contact.telephone1.clone().unwrap_or_default(),
            jobtitle: contact.jobtitle.clone().unwrap_or_default(),
        }
    }
}
