//! Mock authentication and profile settings.
//!
//! The controller is the only writer of the session store. Register and login
//! validate everything before touching the store, so a failed call leaves it
//! exactly as it was.
use crate::countries::CountryCode;
use crate::error::{AccountError, AuthError, ValidationError};
use crate::store::SessionStore;
use crate::user::{ProfileUpdate, RegisterForm, UserRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    LoggedOut,
    LoggedIn,
}

impl AuthState {
    #[must_use]
    pub const fn is_logged_in(self) -> bool {
        matches!(self, Self::LoggedIn)
    }
}

pub struct AuthController<S> {
    store: S,
    state: AuthState,
}

impl<S: SessionStore> AuthController<S> {
    /// Build a controller, resuming whatever session the store holds.
    ///
    /// A set flag without a readable record counts as logged out.
    pub fn new(store: S) -> Self {
        let state = if store.is_logged_in() && store.get().is_some() {
            AuthState::LoggedIn
        } else {
            AuthState::LoggedOut
        };
        Self { store, state }
    }

    #[must_use]
    pub const fn state(&self) -> AuthState {
        self.state
    }

    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.state.is_logged_in()
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// The signed-in user's record, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<UserRecord> {
        if self.state.is_logged_in() {
            self.store.get()
        } else {
            None
        }
    }

    /// Create the device's account, replacing any previous one, and sign in.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for blank fields, mismatched passwords, or
    /// a missing/unknown country.
    pub fn register(&mut self, form: RegisterForm) -> Result<UserRecord, AccountError> {
        let record = validate_registration(form).inspect_err(|err| {
            log::debug!("registration rejected: {err}");
        })?;
        self.store.put(&record);
        self.store.set_logged_in(true);
        self.state = AuthState::LoggedIn;
        log::info!("registered account '{}'", record.username);
        Ok(record)
    }

    /// Sign in against the stored account.
    ///
    /// # Errors
    ///
    /// [`AuthError::NoAccount`] when nothing is stored,
    /// [`AuthError::InvalidCredentials`] unless username and password both
    /// match. The username is trimmed the same way registration trims it.
    pub fn login(&mut self, username: &str, password: &str) -> Result<UserRecord, AccountError> {
        let Some(record) = self.store.get() else {
            log::debug!("login attempted with no stored account");
            return Err(AccountError::from(AuthError::NoAccount));
        };
        let username = username.trim();
        if !record.matches(username, password) {
            log::debug!("login rejected for '{username}'");
            return Err(AccountError::from(AuthError::InvalidCredentials));
        }
        self.store.set_logged_in(true);
        self.state = AuthState::LoggedIn;
        log::info!("'{}' signed in", record.username);
        Ok(record)
    }

    pub fn logout(&mut self) {
        self.store.clear_session();
        self.state = AuthState::LoggedOut;
        log::info!("session cleared");
    }

    /// Merge the supplied fields into the stored record.
    ///
    /// Read-then-write; another tab writing in between is overwritten.
    ///
    /// # Errors
    ///
    /// [`AuthError::NotSignedIn`] outside a session, [`AuthError::NoAccount`]
    /// if the record disappeared, [`ValidationError::MissingField`] for a blank
    /// email.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<UserRecord, AccountError> {
        if !self.state.is_logged_in() {
            return Err(AccountError::from(AuthError::NotSignedIn));
        }
        if update.email.as_deref().is_some_and(|e| e.trim().is_empty()) {
            return Err(AccountError::from(ValidationError::MissingField("Email")));
        }
        let Some(mut record) = self.store.get() else {
            self.state = AuthState::LoggedOut;
            return Err(AccountError::from(AuthError::NoAccount));
        };
        let update = ProfileUpdate {
            email: update.email.map(|e| e.trim().to_string()),
            country: update.country,
        };
        record.merge(update);
        self.store.put(&record);
        log::info!("profile updated for '{}'", record.username);
        Ok(record)
    }
}

fn required(value: String, field: &'static str) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(value)
    }
}

fn validate_registration(form: RegisterForm) -> Result<UserRecord, ValidationError> {
    let username = required(form.username, "Username")?.trim().to_string();
    let email = required(form.email, "Email")?.trim().to_string();
    let password = required(form.password, "Password")?;
    if password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    let country = CountryCode::parse(form.country.as_deref().unwrap_or_default())?;
    Ok(UserRecord {
        username,
        email,
        password,
        country: Some(country),
    })
}
