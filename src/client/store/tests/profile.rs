use std::cell::Cell;

use crate::client::service::{ProfileService, ServiceError};
use crate::client::store::profile::{load_user_profile, ProfileState};
use crate::model::profile::UserProfile;

struct FakeDirectory {
    profile: Result<UserProfile, ServiceError>,
    photo: Result<String, ServiceError>,
    photo_calls: Cell<u32>,
}

impl FakeDirectory {
    fn new(profile: Result<UserProfile, ServiceError>, photo: Result<String, ServiceError>) -> Self {
        Self {
            profile,
            photo,
            photo_calls: Cell::new(0),
        }
    }
}

impl ProfileService for FakeDirectory {
    async fn my_profile(&self) -> Result<UserProfile, ServiceError> {
        self.profile.clone()
    }

    async fn my_photo(&self, _user_id: &str) -> Result<String, ServiceError> {
        self.photo_calls.set(self.photo_calls.get() + 1);
        self.photo.clone()
    }
}

fn profile_with_id() -> UserProfile {
    UserProfile {
        id: Some("u-1".to_string()),
        display_name: Some("Ada Lovelace".to_string()),
        given_name: Some("Ada".to_string()),
        surname: Some("Lovelace".to_string()),
        mail: Some("ada@contoso.com".to_string()),
    }
}

/// Expect a failing profile fetch to surface an error without ever issuing
/// the photo fetch
#[tokio::test]
async fn failed_profile_skips_photo() {
    let directory = FakeDirectory::new(
        Err(ServiceError::Service {
            status: 502,
            message: "upstream unavailable".to_string(),
        }),
        Ok("unused".to_string()),
    );

    let state = load_user_profile(&directory).await;

    assert!(matches!(state, ProfileState::Failed(_)));
    assert_eq!(directory.photo_calls.get(), 0);
}

/// Expect profile and photo on the happy path
#[tokio::test]
async fn loads_profile_and_photo() {
    let directory = FakeDirectory::new(Ok(profile_with_id()), Ok("cGhvdG8=".to_string()));

    let state = load_user_profile(&directory).await;

    assert_eq!(
        state,
        ProfileState::Ready {
            profile: profile_with_id(),
            photo: Some("cGhvdG8=".to_string()),
        }
    );
    assert_eq!(directory.photo_calls.get(), 1);
}

/// Expect a failed photo fetch to be tolerated without surfacing an error
#[tokio::test]
async fn failed_photo_keeps_profile_usable() {
    let directory = FakeDirectory::new(
        Ok(profile_with_id()),
        Err(ServiceError::Service {
            status: 404,
            message: "no photo".to_string(),
        }),
    );

    let state = load_user_profile(&directory).await;

    assert_eq!(
        state,
        ProfileState::Ready {
            profile: profile_with_id(),
            photo: None,
        }
    );
}

/// Expect the photo fetch to be skipped when the profile has no identifier
#[tokio::test]
async fn missing_identifier_skips_photo() {
    let profile = UserProfile {
        id: None,
        ..profile_with_id()
    };
    let directory = FakeDirectory::new(Ok(profile), Ok("unused".to_string()));

    let state = load_user_profile(&directory).await;

    assert!(matches!(
        state,
        ProfileState::Ready { photo: None, .. }
    ));
    assert_eq!(directory.photo_calls.get(), 0);
}
