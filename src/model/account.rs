use serde::{Deserialize, Serialize};

/// An account row as returned by the record store, field names verbatim.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(default)]
    pub accountid: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub accountnumber: Option<String>,
    #[serde(default)]
    pub emailaddress1: Option<String>,
    #[serde(default)]
    pub address1_telephone1: Option<String>,
    #[serde(default)]
    pub websiteurl: Option<String>,
}

/// The writable account fields, shared between the dialog form buffer and
/// the create/update payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AccountDraft {
    pub name: String,
    pub accountnumber: String,
    pub emailaddress1: String,
    pub address1_telephone1: String,
    pub websiteurl: String,
}

impl AccountDraft {
    pub fn from_account(account: &Account) -> Self {
        Self {
            name: account.name.clone().unwrap_or_default(),
            accountnumber: account.accountnumber.clone().unwrap_or_default(),
            emailaddress1: account.emailaddress1.clone().unwrap_or_default(),
            address1_telephone1: account.address1_telephone1.clone().unwrap_or_default(),
            websiteurl: account.websiteurl.clone().unwrap_or_default(),
        }
    }
}
