//! Directory connector client for the signed-in user's profile and photo.

use crate::client::config::AppConfig;
use crate::client::service::{ProfileService, ServiceError};
use crate::model::api::QueryOptions;
use crate::model::profile::UserProfile;

/// Profile fields requested from the connector.
pub const PROFILE_SELECT: [&str; 5] = ["id", "displayName", "givenName", "surname", "mail"];

#[derive(Clone, Debug)]
pub struct Office365Client {
    base: String,
}

impl Office365Client {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base: config.connectors_root.clone(),
        }
    }

    fn profile_url(&self) -> String {
        let options = QueryOptions::new().select(&PROFILE_SELECT);

        format!("{}/me{}", self.base, options.to_query_string())
    }

    fn photo_url(&self, user_id: &str) -> String {
        format!("{}/users/{}/photo/$value", self.base, user_id)
    }
}

#[cfg(feature = "web")]
impl ProfileService for Office365Client {
    async fn my_profile(&self) -> Result<UserProfile, ServiceError> {
        use reqwasm::http::Request;

        let response = Request::get(&self.profile_url())
            .credentials(reqwasm::http::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ServiceError::Request(e.to_string()))?;

        match response.status() {
            200 => response
                .json::<UserProfile>()
                .await
                .map_err(|e| ServiceError::Decode(e.to_string())),
            _ => Err(super::error_from_response(response).await),
        }
    }

    async fn my_photo(&self, user_id: &str) -> Result<String, ServiceError> {
        use base64::{engine::general_purpose::STANDARD, Engine as _};
        use reqwasm::http::Request;

        let response = Request::get(&self.photo_url(user_id))
            .credentials(reqwasm::http::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ServiceError::Request(e.to_string()))?;

        match response.status() {
            200 => response
                .binary()
                .await
                .map(|bytes| STANDARD.encode(bytes))
                .map_err(|e| ServiceError::Decode(e.to_string())),
            _ => Err(super::error_from_response(response).await),
        }
    }
}

#[cfg(not(feature = "web"))]
impl ProfileService for Office365Client {
    async fn my_profile(&self) -> Result<UserProfile, ServiceError> {
        Err(ServiceError::Request(
            "remote calls require the web feature".to_string(),
        ))
    }

    async fn my_photo(&self, _user_id: &str) -> Result<String, ServiceError> {
        Err(ServiceError::Request(
            "remote calls require the web feature".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Office365Client {
        Office365Client {
            base: "/api/connectors/office365users".to_string(),
        }
    }

    /// Expect the profile URL to select exactly the displayed fields
    #[test]
    fn builds_profile_url() {
        assert_eq!(
            client().profile_url(),
            "/api/connectors/office365users/me?$select=id,displayName,givenName,surname,mail"
        );
    }

    /// Expect the photo URL to be keyed by the resolved user identifier
    #[test]
    fn builds_photo_url() {
        assert_eq!(
            client().photo_url("u-1"),
            "/api/connectors/office365users/users/u-1/photo/$value"
        );
    }
}
