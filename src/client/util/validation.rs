//! Reusable validation helpers.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::profile::UserProfile;

/// local-part@domain.tld, with at least one dot in the domain part.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Basic email format validation.
///
/// Empty input is valid so optional email fields can skip validation
/// upstream.
pub fn is_valid_email(email: Option<&str>) -> bool {
    let Some(email) = email else {
        return true;
    };
    let trimmed = email.trim();

    trimmed.is_empty() || EMAIL_PATTERN.is_match(trimmed)
}

/// Returns an error message when the input is invalid.
pub fn email_error(email: Option<&str>) -> Option<&'static str> {
    if is_valid_email(email) {
        None
    } else {
        Some("Please enter a valid email address.")
    }
}

/// Avatar fallback text derived from the profile's name fields.
pub fn initials(profile: &UserProfile) -> String {
    let given = profile
        .given_name
        .as_deref()
        .and_then(|name| name.trim().chars().next());
    let family = profile
        .surname
        .as_deref()
        .and_then(|name| name.trim().chars().next());

    let text = match (given, family) {
        (Some(given), Some(family)) => format!("{given}{family}"),
        _ => profile
            .display_name
            .as_deref()
            .map(|name| {
                name.split_whitespace()
                    .filter_map(|word| word.chars().next())
                    .take(2)
                    .collect::<String>()
            })
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| "?".to_string()),
    };

    text.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect empty and absent input to pass so optional fields skip
    /// validation upstream
    #[test]
    fn empty_input_is_valid() {
        assert!(is_valid_email(None));
        assert!(is_valid_email(Some("")));
        assert!(is_valid_email(Some("   ")));
    }

    /// Expect a minimal well-formed address to pass
    #[test]
    fn accepts_minimal_address() {
        assert!(is_valid_email(Some("a@b.co")));
    }

    /// Expect addresses without an @ or without a dot in the domain to fail
    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(Some("not-an-email")));
        assert!(!is_valid_email(Some("a@b")));
        assert!(!is_valid_email(Some("a b@c.co")));
        assert!(!is_valid_email(Some("a@b@c.co")));
    }

    /// Expect an error message only for invalid input
    #[test]
    fn error_message_matches_validity() {
        assert_eq!(email_error(Some("a@b.co")), None);
        assert_eq!(
            email_error(Some("a@b")),
            Some("Please enter a valid email address.")
        );
    }

    /// Expect initials from the given and family names, uppercased
    #[test]
    fn initials_prefer_name_parts() {
        let profile = UserProfile {
            given_name: Some("ada".to_string()),
            surname: Some("lovelace".to_string()),
            ..UserProfile::default()
        };

        assert_eq!(initials(&profile), "AL");
    }

    /// Expect the display name to back the initials when name parts are
    /// missing
    #[test]
    fn initials_fall_back_to_display_name() {
        let profile = UserProfile {
            display_name: Some("Grace Brewster Hopper".to_string()),
            ..UserProfile::default()
        };

        assert_eq!(initials(&profile), "GB");
    }

    /// Expect a placeholder when no name information exists
    #[test]
    fn initials_fall_back_to_placeholder() {
        assert_eq!(initials(&UserProfile::default()), "?");
    }
}
