use secrecy::ExposeSecret;
use simple_auth_core::AccountStore;

use crate::helpers::{secret, service, service_with_account};

#[tokio::test]
async fn signup_creates_exactly_one_account() {
    let service = service_with_account().await;

    let accounts = service.accounts().await.unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].username, "a@b.com");
    assert_eq!(accounts[0].nickname, "nick_1");

    let stored = service
        .account_store()
        .find_by_username("a@b.com")
        .await
        .unwrap()
        .unwrap();
    assert_ne!(
        stored.credential().as_ref().expose_secret().as_str(),
        "Abcd123!"
    );
}

#[tokio::test]
async fn duplicate_username_is_unavailable() {
    let service = service_with_account().await;

    let error = service
        .signup("a@b.com".to_string(), "nick_2".to_string(), secret("Abcd123!"))
        .await
        .unwrap_err();
    assert_eq!(error.messages(), ["username unavailable"]);

    let accounts = service.accounts().await.unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].nickname, "nick_1");
}

#[tokio::test]
async fn invalid_password_reports_every_rule() {
    let service = service();

    let error = service
        .signup("a@b.com".to_string(), "nick_1".to_string(), secret("pass word"))
        .await
        .unwrap_err();
    assert_eq!(
        error.messages(),
        [
            "password may only contain letters, digits and the symbols ! @ # $ % ^ & * _",
            "password must contain at least one uppercase letter",
            "password must contain at least one digit",
            "password must contain at least one symbol (! @ # $ % ^ & * _)",
            "password must not contain whitespace",
        ]
    );
    assert!(service.accounts().await.unwrap().is_empty());
}

#[tokio::test]
async fn username_failure_stops_before_other_fields() {
    let service = service();

    let error = service
        .signup("12345".to_string(), "".to_string(), secret(""))
        .await
        .unwrap_err();
    assert_eq!(
        error.to_string(),
        "username must be a well-formed email address\nusername must not consist of digits only"
    );
}
