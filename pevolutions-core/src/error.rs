//! Error taxonomy surfaced to the presentation layer.
//!
//! The `Display` text of every variant is the inline message a form shows.
use thiserror::Error;

/// Malformed or missing form input. Raised before the store is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Please select your country")]
    MissingCountry,
    #[error("Unknown country code: {0}")]
    UnknownCountry(String),
}

/// Credential or session problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("No account exists on this device yet")]
    NoAccount,
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("You need to sign in first")]
    NotSignedIn,
}

/// Result error of every controller operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl AccountError {
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    #[must_use]
    pub const fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            ValidationError::MissingField("Username").to_string(),
            "Username is required"
        );
        let err: AccountError = AuthError::InvalidCredentials.into();
        assert_eq!(err.to_string(), "Invalid username or password");
        assert!(err.is_auth());
        assert!(!err.is_validation());
    }

    #[test]
    fn unknown_country_echoes_code() {
        let err: AccountError = ValidationError::UnknownCountry("ZZ".into()).into();
        assert!(err.is_validation());
        assert!(err.to_string().contains("ZZ"));
    }
}
