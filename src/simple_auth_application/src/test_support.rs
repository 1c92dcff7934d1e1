use std::{collections::HashMap, sync::Arc};

use secrecy::{ExposeSecret, Secret};
use simple_auth_core::{
    Account, AccountStore, AccountStoreError, Credential, CredentialHasher, HashingError,
    Nickname, Username,
};
use tokio::sync::RwLock;

/// Prefixes the plaintext so tests can predict stored credentials.
pub struct MockHasher;

impl CredentialHasher for MockHasher {
    fn hash(&self, plaintext: &Secret<String>) -> Result<Credential, HashingError> {
        Ok(Credential::new(format!("hashed:{}", plaintext.expose_secret())))
    }
}

pub struct FailingHasher;

impl CredentialHasher for FailingHasher {
    fn hash(&self, _plaintext: &Secret<String>) -> Result<Credential, HashingError> {
        Err(HashingError::EncryptionFailed)
    }
}

#[derive(Default)]
pub enum Behaviour {
    #[default]
    Honest,
    RejectCreate,
    FailLookups,
    /// Answers authenticated lookups with whichever account it holds first.
    IgnoreUsernameOnAuth,
}

#[derive(Clone, Default)]
pub struct MockAccountStore {
    pub accounts: Arc<RwLock<HashMap<String, Account>>>,
    behaviour: Arc<Behaviour>,
}

impl MockAccountStore {
    pub fn with_behaviour(behaviour: Behaviour) -> Self {
        Self {
            accounts: Arc::default(),
            behaviour: Arc::new(behaviour),
        }
    }

    pub async fn insert(&self, username: &str, nickname: &str, credential: &str) {
        let account = Account::new(
            Username::try_from(username).unwrap(),
            Nickname::try_from(nickname).unwrap(),
            Credential::new(credential.to_string()),
        );
        self.accounts
            .write()
            .await
            .insert(username.to_string(), account);
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    fn lookup_guard(&self) -> Result<(), AccountStoreError> {
        match *self.behaviour {
            Behaviour::FailLookups => Err(AccountStoreError::UnexpectedError(
                "lookup failed".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl AccountStore for MockAccountStore {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, AccountStoreError> {
        self.lookup_guard()?;
        Ok(self.accounts.read().await.get(username).cloned())
    }

    async fn find_authenticated(
        &self,
        username: &str,
        credential: &Credential,
    ) -> Result<Option<Account>, AccountStoreError> {
        self.lookup_guard()?;
        let accounts = self.accounts.read().await;
        if let Behaviour::IgnoreUsernameOnAuth = *self.behaviour {
            return Ok(accounts.values().next().cloned());
        }
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
        if let Behaviour::RejectCreate = *self.behaviour {
            return Err(AccountStoreError::UnexpectedError(
                "write failed".to_string(),
            ));
        }
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(username.as_ref()) {
            return Err(AccountStoreError::AccountAlreadyExists);
        }
        let account = Account::new(username, nickname, credential);
        accounts.insert(account.username().to_string(), account.clone());
        Ok(account)
    }

    async fn delete(&self, account: &Account) {
        self.accounts
            .write()
            .await
            .remove(account.username().as_ref());
    }

    async fn list_all(&self) -> Result<Vec<Account>, AccountStoreError> {
        self.lookup_guard()?;
        Ok(self.accounts.read().await.values().cloned().collect())
    }
}
