//! Tests for the authentication use case

use stockroom_application::{AuthService, SeedCredential};
use stockroom_domain::{Error, Role};

#[test]
fn seed_pairs_authenticate_with_the_correct_role() {
    let service = AuthService::with_default_seed();

    let manager = service
        .authenticate("manager@stockroom.dev", "password")
        .unwrap();
    assert_eq!(manager.role, Role::Manager);
    assert_eq!(manager.email, "manager@stockroom.dev");
    assert_eq!(manager.id, "1");
    assert!(!manager.token.is_empty());

    let keeper = service
        .authenticate("storekeeper@stockroom.dev", "password")
        .unwrap();
    assert_eq!(keeper.role, Role::StoreKeeper);
    assert_eq!(keeper.id, "2");
}

#[test]
fn non_matching_pairs_are_rejected_generically() {
    let service = AuthService::with_default_seed();

    let cases = [
        ("manager@stockroom.dev", "wrong"),
        ("storekeeper@stockroom.dev", "Password"),
        ("nobody@stockroom.dev", "password"),
        // Right password, wrong email casing
        ("Manager@stockroom.dev", "password"),
    ];
    for (email, password) in cases {
        let err = service.authenticate(email, password).unwrap_err();
        assert!(
            matches!(err, Error::InvalidCredentials),
            "({email}, {password}) must fail with the generic error"
        );
        assert_eq!(err.to_string(), "Invalid credentials");
    }
}

#[test]
fn empty_fields_are_rejected() {
    let service = AuthService::with_default_seed();
    assert!(service.authenticate("", "password").is_err());
    assert!(service.authenticate("manager@stockroom.dev", "").is_err());
    assert!(service.authenticate("", "").is_err());
}

#[test]
fn tokens_are_opaque_and_fresh_per_login() {
    let service = AuthService::with_default_seed();
    let first = service
        .authenticate("manager@stockroom.dev", "password")
        .unwrap();
    let second = service
        .authenticate("manager@stockroom.dev", "password")
        .unwrap();
    assert_ne!(first.token, second.token);
}

#[test]
fn custom_allow_list_is_honored() {
    let service = AuthService::new(vec![SeedCredential::new(
        "solo@stockroom.dev",
        "s3cret",
        Role::StoreKeeper,
    )]);

    let identity = service.authenticate("solo@stockroom.dev", "s3cret").unwrap();
    assert_eq!(identity.role, Role::StoreKeeper);
    assert!(service
        .authenticate("manager@stockroom.dev", "password")
        .is_err());
}
