use pevolutions_core::{
    AccountError, AuthController, AuthError, AuthState, CountryCode, KeyValueStore, MemoryStorage,
    ProfileUpdate, RegisterForm, SessionStore, SessionStoreAdapter, USER_KEY, ValidationError,
};

fn controller() -> (MemoryStorage, AuthController<SessionStoreAdapter<MemoryStorage>>) {
    let backend = MemoryStorage::new();
    let auth = AuthController::new(SessionStoreAdapter::new(backend.clone()));
    (backend, auth)
}

fn form(username: &str, password: &str, confirm: &str, country: Option<&str>) -> RegisterForm {
    RegisterForm {
        username: username.to_string(),
        email: format!("{}@example.com", username.to_lowercase()),
        password: password.to_string(),
        confirm_password: confirm.to_string(),
        country: country.map(str::to_string),
    }
}

#[test]
fn register_then_login_round_trips_for_many_credentials() {
    let cases = [
        ("Ash", "p1", "JP"),
        ("Misty", "starmie!", "br"),
        ("Brock", "a long passphrase with spaces", "US"),
        ("Dawn", "ünïcødé", "pt"),
    ];
    for (username, password, country) in cases {
        let (_, mut auth) = controller();
        auth.register(form(username, password, password, Some(country)))
            .unwrap();
        auth.logout();
        let record = auth.login(username, password).unwrap();
        assert_eq!(record.username, username);
        assert_eq!(auth.state(), AuthState::LoggedIn);
    }
}

#[test]
fn padded_username_round_trips() {
    let (_, mut auth) = controller();
    let record = auth
        .register(form("Ash ", "p1", "p1", Some("JP")))
        .unwrap();
    assert_eq!(record.username, "Ash");
    auth.logout();

    assert!(auth.login("Ash ", "p1").is_ok());
    auth.logout();
    assert!(auth.login("  Ash", "p1").is_ok());
    assert_eq!(
        auth.login("Ash", "p1 ").unwrap_err(),
        AccountError::Auth(AuthError::InvalidCredentials)
    );
}

#[test]
fn mismatched_passwords_never_mutate_the_store() {
    let (backend, mut auth) = controller();
    auth.register(form("Ash", "p1", "p1", Some("JP"))).unwrap();
    auth.logout();
    let before = backend.snapshot();

    let err = auth
        .register(form("Gary", "eevee", "Eevee", Some("JP")))
        .unwrap_err();
    assert!(matches!(
        err,
        AccountError::Validation(ValidationError::PasswordMismatch)
    ));
    assert_eq!(backend.snapshot(), before);
    assert!(auth.store().get().is_some_and(|r| r.username == "Ash"));
}

#[test]
fn unknown_country_is_rejected_before_writing() {
    let (backend, mut auth) = controller();
    let err = auth
        .register(form("Ash", "p1", "p1", Some("XX")))
        .unwrap_err();
    assert!(err.is_validation());
    assert!(backend.is_empty());
}

#[test]
fn empty_store_login_fails_with_auth_error() {
    let (backend, mut auth) = controller();
    let err = auth.login("Ash", "p1").unwrap_err();
    assert_eq!(err, AccountError::Auth(AuthError::NoAccount));
    assert!(backend.is_empty());
}

#[test]
fn profile_update_preserves_unspecified_fields() {
    let (_, mut auth) = controller();
    auth.register(form("Ash", "p1", "p1", Some("JP"))).unwrap();

    let updated = auth
        .update_profile(ProfileUpdate {
            email: Some("ash@pallet.town".into()),
            country: None,
        })
        .unwrap();
    assert_eq!(updated.username, "Ash");
    assert_eq!(updated.password, "p1");
    assert_eq!(updated.country, CountryCode::parse("JP").ok());
    assert_eq!(updated.email, "ash@pallet.town");

    let reloaded = auth.current_user().unwrap();
    assert_eq!(reloaded, updated);
}

#[test]
fn logout_keeps_account_for_next_login() {
    let (backend, mut auth) = controller();
    auth.register(form("Ash", "p1", "p1", Some("JP"))).unwrap();
    auth.logout();
    assert!(!auth.store().is_logged_in());
    assert!(backend.get_item(USER_KEY).is_some());
    assert!(auth.login("Ash", "p1").is_ok());
    assert!(auth.store().is_logged_in());
}

#[test]
fn controllers_sharing_storage_see_the_same_session() {
    let backend = MemoryStorage::new();
    let mut tab_a = AuthController::new(SessionStoreAdapter::new(backend.clone()));
    tab_a.register(form("Ash", "p1", "p1", Some("JP"))).unwrap();

    let mut tab_b = AuthController::new(SessionStoreAdapter::new(backend.clone()));
    assert!(tab_b.is_logged_in());
    tab_b.logout();

    let tab_c = AuthController::new(SessionStoreAdapter::new(backend));
    assert!(!tab_c.is_logged_in());
}
