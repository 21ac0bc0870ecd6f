use serde::{Deserialize, Serialize};

use crate::countries::CountryCode;

/// The single persisted account profile.
///
/// Passwords are stored as plain text. The portal mocks authentication and
/// there is no server to protect them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<CountryCode>,
}

impl UserRecord {
    #[must_use]
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }

    /// Apply a profile update, leaving unspecified fields untouched.
    pub fn merge(&mut self, update: ProfileUpdate) {
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(country) = update.country {
            self.country = Some(country);
        }
    }
}

/// Raw registration form as collected by the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub country: Option<String>,
}

/// Fields the account settings form may change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub email: Option<String>,
    pub country: Option<CountryCode>,
}

impl ProfileUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.country.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ash() -> UserRecord {
        UserRecord {
            username: "Ash".into(),
            email: "ash@example.com".into(),
            password: "p1".into(),
            country: Some(CountryCode::parse("JP").unwrap()),
        }
    }

    #[test]
    fn serializes_with_stored_layout() {
        let json = serde_json::to_value(ash()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "username": "Ash",
                "email": "ash@example.com",
                "password": "p1",
                "country": "JP"
            })
        );
    }

    #[test]
    fn missing_country_key_decodes_as_none() {
        let record: UserRecord = serde_json::from_str(
            r#"{"username":"Misty","email":"m@example.com","password":"x"}"#,
        )
        .unwrap();
        assert!(record.country.is_none());
        let back = serde_json::to_string(&record).unwrap();
        assert!(!back.contains("country"));
    }

    #[test]
    fn matches_requires_both_fields() {
        let user = ash();
        assert!(user.matches("Ash", "p1"));
        assert!(!user.matches("ash", "p1"));
        assert!(!user.matches("Ash", "P1"));
    }

    #[test]
    fn merge_only_touches_supplied_fields() {
        let mut user = ash();
        user.merge(ProfileUpdate {
            email: Some("new@example.com".into()),
            country: None,
        });
        assert_eq!(user.email, "new@example.com");
        assert_eq!(user.country.as_ref().map(CountryCode::as_str), Some("JP"));
        assert_eq!(user.password, "p1");
    }
}
