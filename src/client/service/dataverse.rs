//! Record store client.
//!
//! One thin service object per entity set, all sharing `DataverseClient` for
//! the HTTP plumbing. Reads select only the displayed fields; mutations send
//! the draft as-is, since the field names already match the store schema.

use crate::client::config::AppConfig;
use crate::client::service::{RecordService, ServiceError};
use crate::model::account::{Account, AccountDraft};
use crate::model::api::QueryOptions;
use crate::model::contact::{Contact, ContactDraft};

pub const CONTACTS_ENTITY_SET: &str = "contacts";
pub const ACCOUNTS_ENTITY_SET: &str = "accounts";

/// HTTP client for the record store's OData endpoint.
#[derive(Clone, Debug)]
pub struct DataverseClient {
    base: String,
}

impl DataverseClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn collection_url(&self, entity_set: &str, options: &QueryOptions) -> String {
        format!("{}/{}{}", self.base, entity_set, options.to_query_string())
    }

    fn record_url(&self, entity_set: &str, id: &str) -> String {
        format!("{}/{}({})", self.base, entity_set, id)
    }
}

#[cfg(feature = "web")]
impl DataverseClient {
    pub async fn list<T: serde::de::DeserializeOwned>(
        &self,
        entity_set: &str,
        options: &QueryOptions,
    ) -> Result<Vec<T>, ServiceError> {
        use crate::model::api::ListResponse;
        use reqwasm::http::Request;

        let url = self.collection_url(entity_set, options);
        let response = Request::get(&url)
            .credentials(reqwasm::http::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ServiceError::Request(e.to_string()))?;

        match response.status() {
            200 => response
                .json::<ListResponse<T>>()
                .await
                .map(|body| body.value)
                .map_err(|e| ServiceError::Decode(e.to_string())),
            _ => Err(super::error_from_response(response).await),
        }
    }

    pub async fn create<B: serde::Serialize>(
        &self,
        entity_set: &str,
        record: &B,
    ) -> Result<(), ServiceError> {
        use reqwasm::http::Request;

        let url = format!("{}/{}", self.base, entity_set);
        let body = serde_json::to_string(record).map_err(|e| ServiceError::Decode(e.to_string()))?;
        let response = Request::post(&url)
            .credentials(reqwasm::http::RequestCredentials::Include)
            .header("Content-Type", "application/json")
            .header("Prefer", "return=representation")
            .body(body)
            .send()
            .await
            .map_err(|e| ServiceError::Request(e.to_string()))?;

        match response.status() {
            200 | 201 | 204 => Ok(()),
            _ => Err(super::error_from_response(response).await),
        }
    }

    pub async fn update<B: serde::Serialize>(
        &self,
        entity_set: &str,
        id: &str,
        record: &B,
    ) -> Result<(), ServiceError> {
        use reqwasm::http::{Method, Request};

        let url = self.record_url(entity_set, id);
        let body = serde_json::to_string(record).map_err(|e| ServiceError::Decode(e.to_string()))?;
        let response = Request::new(&url)
            .method(Method::PATCH)
            .credentials(reqwasm::http::RequestCredentials::Include)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| ServiceError::Request(e.to_string()))?;

        match response.status() {
            200 | 204 => Ok(()),
            _ => Err(super::error_from_response(response).await),
        }
    }

    pub async fn delete(&self, entity_set: &str, id: &str) -> Result<(), ServiceError> {
        use reqwasm::http::Request;

        let url = self.record_url(entity_set, id);
        let response = Request::delete(&url)
            .credentials(reqwasm::http::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ServiceError::Request(e.to_string()))?;

        match response.status() {
            200 | 204 => Ok(()),
            _ => Err(super::error_from_response(response).await),
        }
    }
}

#[cfg(not(feature = "web"))]
impl DataverseClient {
    fn unavailable() -> ServiceError {
        ServiceError::Request("remote calls require the web feature".to_string())
    }

    pub async fn list<T: serde::de::DeserializeOwned>(
        &self,
        _entity_set: &str,
        _options: &QueryOptions,
    ) -> Result<Vec<T>, ServiceError> {
        Err(Self::unavailable())
    }

    pub async fn create<B: serde::Serialize>(
        &self,
        _entity_set: &str,
        _record: &B,
    ) -> Result<(), ServiceError> {
        Err(Self::unavailable())
    }

    pub async fn update<B: serde::Serialize>(
        &self,
        _entity_set: &str,
        _id: &str,
        _record: &B,
    ) -> Result<(), ServiceError> {
        Err(Self::unavailable())
    }

    pub async fn delete(&self, _entity_set: &str, _id: &str) -> Result<(), ServiceError> {
        Err(Self::unavailable())
    }
}

/// Contacts service over the shared record store client.
#[derive(Clone, Debug)]
pub struct ContactsService {
    client: DataverseClient,
}

impl ContactsService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: DataverseClient::new(config.dataverse_root.clone()),
        }
    }
}

impl RecordService for ContactsService {
    type Record = Contact;
    type Draft = ContactDraft;

    async fn get_all(&self, options: &QueryOptions) -> Result<Vec<Contact>, ServiceError> {
        self.client.list(CONTACTS_ENTITY_SET, options).await
    }

    async fn create(&self, draft: &ContactDraft) -> Result<(), ServiceError> {
        self.client.create(CONTACTS_ENTITY_SET, draft).await
    }

    async fn update(&self, id: &str, draft: &ContactDraft) -> Result<(), ServiceError> {
        self.client.update(CONTACTS_ENTITY_SET, id, draft).await
    }

    async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        self.client.delete(CONTACTS_ENTITY_SET, id).await
    }
}

/// Accounts service over the shared record store client.
#[derive(Clone, Debug)]
pub struct AccountsService {
    client: DataverseClient,
}

impl AccountsService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: DataverseClient::new(config.dataverse_root.clone()),
        }
    }
}

impl RecordService for AccountsService {
    type Record = Account;
    type Draft = AccountDraft;

    async fn get_all(&self, options: &QueryOptions) -> Result<Vec<Account>, ServiceError> {
        self.client.list(ACCOUNTS_ENTITY_SET, options).await
    }

    async fn create(&self, draft: &AccountDraft) -> Result<(), ServiceError> {
        self.client.create(ACCOUNTS_ENTITY_SET, draft).await
    }

    async fn update(&self, id: &str, draft: &AccountDraft) -> Result<(), ServiceError> {
        self.client.update(ACCOUNTS_ENTITY_SET, id, draft).await
    }

    async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        self.client.delete(ACCOUNTS_ENTITY_SET, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect collection URLs to join the base, entity set, and query string
    #[test]
    fn builds_collection_url() {
        let client = DataverseClient::new("/api/data/v9.2");
        let options = QueryOptions::new().order_by(&["fullname"]).top(100);

        assert_eq!(
            client.collection_url(CONTACTS_ENTITY_SET, &options),
            "/api/data/v9.2/contacts?$orderby=fullname&$top=100"
        );
    }

    /// Expect record URLs to wrap the identifier in parentheses
    #[test]
    fn builds_record_url() {
        let client = DataverseClient::new("/api/data/v9.2");

        assert_eq!(
            client.record_url(ACCOUNTS_ENTITY_SET, "42"),
            "/api/data/v9.2/accounts(42)"
        );
    }
}
