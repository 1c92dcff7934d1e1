use simple_auth_adapters::config::{Settings, StoreBackend, StoreSettings};
use simple_auth_service::ConfiguredAccountService;

use crate::helpers::secret;

fn file_settings(dir: &tempfile::TempDir) -> Settings {
    Settings {
        store: StoreSettings {
            backend: StoreBackend::File,
            path: dir.path().join("accounts.json"),
        },
        ..Settings::default()
    }
}

#[tokio::test]
async fn accounts_outlive_the_service() {
    let dir = tempfile::tempdir().unwrap();
    let settings = file_settings(&dir);

    let service = ConfiguredAccountService::from_settings(&settings).await.unwrap();
    service
        .signup("a@b.com".to_string(), "nick_1".to_string(), secret("Abcd123!"))
        .await
        .unwrap();
    drop(service);

    let restarted = ConfiguredAccountService::from_settings(&settings).await.unwrap();
    // Sessions are not persisted.
    assert!(restarted.current_user().await.is_none());

    let profile = restarted
        .login("a@b.com".to_string(), secret("Abcd123!"))
        .await
        .unwrap();
    assert_eq!(profile.nickname, "nick_1");
}

#[tokio::test]
async fn deleted_accounts_stay_deleted() {
    let dir = tempfile::tempdir().unwrap();
    let settings = file_settings(&dir);

    let service = ConfiguredAccountService::from_settings(&settings).await.unwrap();
    service
        .signup("a@b.com".to_string(), "nick_1".to_string(), secret("Abcd123!"))
        .await
        .unwrap();
    service.delete_account("a@b.com".to_string()).await.unwrap();
    drop(service);

    let restarted = ConfiguredAccountService::from_settings(&settings).await.unwrap();
    assert!(restarted.accounts().await.unwrap().is_empty());
}

#[tokio::test]
async fn default_settings_use_memory() {
    let service = ConfiguredAccountService::from_settings(&Settings::default())
        .await
        .unwrap();
    assert!(service.accounts().await.unwrap().is_empty());
}
