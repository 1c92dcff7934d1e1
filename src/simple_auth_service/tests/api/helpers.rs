use secrecy::Secret;
use simple_auth_adapters::{hashing::Sha256CredentialHasher, persistence::HashMapAccountStore};
use simple_auth_service::AccountService;

pub type TestService = AccountService<HashMapAccountStore, Sha256CredentialHasher>;

pub fn service() -> TestService {
    AccountService::new(HashMapAccountStore::new(), Sha256CredentialHasher::new())
}

pub fn secret(value: &str) -> Secret<String> {
    Secret::from(value.to_string())
}

/// Signs up `a@b.com` / `nick_1` / `Abcd123!`.
pub async fn service_with_account() -> TestService {
    let service = service();
    service
        .signup("a@b.com".to_string(), "nick_1".to_string(), secret("Abcd123!"))
        .await
        .unwrap();
    service
}
