use simple_auth_core::AccountStore;
use simple_auth_service::AccountServiceError;

use crate::helpers::{secret, service_with_account};

#[tokio::test]
async fn deleting_unknown_username_changes_nothing() {
    let service = service_with_account().await;

    let error = service
        .delete_account("nobody@b.com".to_string())
        .await
        .unwrap_err();
    assert_eq!(error.messages(), ["no matching account"]);
    assert_eq!(service.accounts().await.unwrap().len(), 1);
}

#[tokio::test]
async fn deleting_an_account_removes_it() {
    let service = service_with_account().await;

    assert!(service.delete_account("a@b.com".to_string()).await.unwrap());
    assert!(
        service
            .account_store()
            .find_by_username("a@b.com")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn deleting_the_current_account_ends_the_session() {
    let service = service_with_account().await;
    service
        .login("a@b.com".to_string(), secret("Abcd123!"))
        .await
        .unwrap();

    assert!(service.delete_current_account().await.unwrap());
    assert!(service.current_user().await.is_none());
    assert!(service.accounts().await.unwrap().is_empty());

    let login = service
        .login("a@b.com".to_string(), secret("Abcd123!"))
        .await;
    assert!(login.is_err());
}

#[tokio::test]
async fn deleting_another_account_keeps_the_session() {
    let service = service_with_account().await;
    service
        .signup("c@d.com".to_string(), "nick_2".to_string(), secret("Efgh456@"))
        .await
        .unwrap();
    service
        .login("a@b.com".to_string(), secret("Abcd123!"))
        .await
        .unwrap();

    assert!(service.delete_account("c@d.com".to_string()).await.unwrap());
    assert_eq!(
        service.current_user().await.map(|profile| profile.username),
        Some("a@b.com".to_string())
    );
}

#[tokio::test]
async fn delete_current_account_requires_a_session() {
    let service = service_with_account().await;

    let error = service.delete_current_account().await.unwrap_err();
    assert!(matches!(error, AccountServiceError::NoSignedInAccount));
    assert_eq!(error.messages(), ["no signed-in account"]);
    assert_eq!(service.accounts().await.unwrap().len(), 1);
}
