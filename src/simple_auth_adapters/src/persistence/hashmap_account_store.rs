use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use simple_auth_core::{
    Account, AccountStore, AccountStoreError, Credential, Nickname, Username,
};

#[derive(Default, Clone)]
pub struct HashMapAccountStore {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl HashMapAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl AccountStore for HashMapAccountStore {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, AccountStoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(username).cloned())
    }

    async fn find_authenticated(
        &self,
        username: &str,
        credential: &Credential,
    ) -> Result<Option<Account>, AccountStoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .get(username)
            .filter(|account| account.credential_matches(credential))
            .cloned())
    }

    async fn create(
        &self,
        username: Username,
        nickname: Nickname,
        credential: Credential,
    ) -> Result<Account, AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(username.as_ref()) {
            return Err(AccountStoreError::AccountAlreadyExists);
        }
        let account = Account::new(username, nickname, credential);
        accounts.insert(account.username().to_string(), account.clone());
        Ok(account)
    }

    async fn delete(&self, account: &Account) {
        let mut accounts = self.accounts.write().await;
        if accounts.remove(account.username().as_ref()).is_none() {
            tracing::warn!(username = %account.username(), "Deleted account was not in the store");
        }
    }

    async fn list_all(&self) -> Result<Vec<Account>, AccountStoreError> {
        let accounts = self.accounts.read().await;
        let mut all: Vec<Account> = accounts.values().cloned().collect();
        all.sort_by(|a, b| a.username().as_ref().cmp(b.username().as_ref()));
        Ok(all)
    }
}
