//! Clients for the external services this application consumes.
//!
//! The record store and the directory connector are reached over HTTP and
//! exposed behind traits so pages and tests depend on the operation
//! contracts, not on the transport. Remote results are plain
//! `Result<T, ServiceError>` values; there is no ambiguous
//! success-without-data state.

pub mod dataverse;
pub mod error;
pub mod office365;

pub use error::ServiceError;

use crate::client::util::validation;
use crate::model::account::AccountDraft;
use crate::model::api::QueryOptions;
use crate::model::contact::ContactDraft;
use crate::model::profile::UserProfile;

/// A per-entity collaborator exposing the record store operations.
///
/// One implementation exists per entity type; tests substitute in-memory
/// fakes through the same trait.
pub trait RecordService {
    type Record;
    type Draft: RecordDraft;

    async fn get_all(&self, options: &QueryOptions) -> Result<Vec<Self::Record>, ServiceError>;
    async fn create(&self, draft: &Self::Draft) -> Result<(), ServiceError>;
    async fn update(&self, id: &str, draft: &Self::Draft) -> Result<(), ServiceError>;
    async fn delete(&self, id: &str) -> Result<(), ServiceError>;
}

/// Local validation performed on a draft before it may be submitted.
pub trait RecordDraft {
    fn validate(&self) -> Result<(), String>;
}

/// Validates a draft locally, then submits it as a create (no target) or an
/// update (resolved target identifier).
///
/// A validation failure returns immediately; the remote service is never
/// called for a draft that fails its local checks.
pub async fn submit_record<S: RecordService>(
    service: &S,
    draft: &S::Draft,
    target: Option<&str>,
) -> Result<(), ServiceError> {
    draft.validate().map_err(ServiceError::Validation)?;

    match target {
        Some(id) => service.update(id, draft).await,
        None => service.create(draft).await,
    }
}

impl RecordDraft for ContactDraft {
    fn validate(&self) -> Result<(), String> {
        if self.lastname.trim().is_empty() {
            return Err("Last name is required".to_string());
        }
        if let Some(message) = validation::email_error(Some(&self.emailaddress1)) {
            return Err(message.to_string());
        }

        Ok(())
    }
}

impl RecordDraft for AccountDraft {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Account name is required".to_string());
        }
        if let Some(message) = validation::email_error(Some(&self.emailaddress1)) {
            return Err(message.to_string());
        }

        Ok(())
    }
}

/// The signed-in user's directory profile and photo, consumed read-only.
pub trait ProfileService {
    async fn my_profile(&self) -> Result<UserProfile, ServiceError>;

    /// Fetches the user's photo as a base64 payload.
    async fn my_photo(&self, user_id: &str) -> Result<String, ServiceError>;
}

/// Decodes a failure response into a service error, preferring the JSON
/// error body and falling back to raw text.
#[cfg(feature = "web")]
pub(crate) async fn error_from_response(response: reqwasm::http::Response) -> ServiceError {
    use crate::model::api::ErrorResponse;

    let status = response.status();

    if let Ok(body) = response.json::<ErrorResponse>().await {
        ServiceError::Service {
            status,
            message: body.error.message,
        }
    } else {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        ServiceError::Service { status, message }
    }
}
