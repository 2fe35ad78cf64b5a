use dioxus_logger::tracing;

use crate::client::service::ProfileService;
use crate::model::profile::UserProfile;

/// Result of the one-shot profile load. While the resource is still
/// resolving there is no state yet; no retry or cache invalidation exists.
#[derive(Clone, Debug, PartialEq)]
pub enum ProfileState {
    Ready {
        profile: UserProfile,
        /// Base64 photo payload; absent when the photo fetch failed or the
        /// profile carried no identifier.
        photo: Option<String>,
    },
    Failed(String),
}

/// Loads the profile, then the photo for the resolved identifier.
///
/// The photo request is only issued once the profile fetch succeeded and
/// yielded an identifier. A failed photo fetch leaves the profile usable
/// and the avatar falls back to initials; a failed profile fetch surfaces
/// the service message and skips the photo entirely.
pub async fn load_user_profile<S: ProfileService>(service: &S) -> ProfileState {
    let profile = match service.my_profile().await {
        Ok(profile) => profile,
        Err(error) => {
            tracing::error!("failed to load user profile: {error}");
            return ProfileState::Failed(error.to_string());
        }
    };

    let photo = match profile.id.as_deref() {
        Some(id) => match service.my_photo(id).await {
            Ok(photo) => Some(photo),
            Err(error) => {
                tracing::warn!("failed to load user photo: {error}");
                None
            }
        },
        None => None,
    };

    ProfileState::Ready { profile, photo }
}
