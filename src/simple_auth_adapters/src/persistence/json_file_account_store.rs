use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use simple_auth_core::{
    Account, AccountStore, AccountStoreError, Credential, Nickname, Username,
};
use tokio::sync::RwLock;

/// On-disk shape of one account.
#[derive(Debug, Serialize, Deserialize)]
struct AccountRecord {
    username: String,
    nickname: String,
    credential: String,
}

impl AccountRecord {
    fn from_account(account: &Account) -> Self {
        Self {
            username: account.username().to_string(),
            nickname: account.nickname().to_string(),
            credential: account.credential().as_ref().expose_secret().clone(),
        }
    }

    fn into_account(self) -> Result<Account, AccountStoreError> {
        let username = Username::try_from(self.username)
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;
        let nickname = Nickname::try_from(self.nickname)
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;
        Ok(Account::new(
            username,
            nickname,
            Credential::new(self.credential),
        ))
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct AccountFile {
    accounts: Vec<AccountRecord>,
}

/// Persistent account store backed by a single JSON file.
///
/// The whole file is loaded on open and rewritten after every mutation,
/// through a sibling temp file and a rename.
#[derive(Clone)]
pub struct JsonFileAccountStore {
    path: PathBuf,
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl JsonFileAccountStore {
    /// Opens the store at `path`. A missing file is an empty store.
    #[tracing::instrument(name = "Opening JSON account store", skip_all, fields(path = %path.as_ref().display()))]
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, AccountStoreError> {
        let path = path.as_ref().to_path_buf();

        let accounts = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let file: AccountFile = serde_json::from_slice(&bytes)
                    .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;
                file.accounts
                    .into_iter()
                    .map(|record| {
                        let account = record.into_account()?;
                        Ok((account.username().to_string(), account))
                    })
                    .collect::<Result<HashMap<_, _>, AccountStoreError>>()?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(AccountStoreError::UnexpectedError(e.to_string())),
        };

        tracing::debug!(count = accounts.len(), "Loaded accounts");

        Ok(Self {
            path,
            accounts: Arc::new(RwLock::new(accounts)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[tracing::instrument(name = "Persisting accounts", skip_all)]
    async fn persist(&self, accounts: &HashMap<String, Account>) -> Result<(), AccountStoreError> {
        let mut records: Vec<AccountRecord> =
            accounts.values().map(AccountRecord::from_account).collect();
        records.sort_by(|a, b| a.username.cmp(&b.username));

        let bytes = serde_json::to_vec_pretty(&AccountFile { accounts: records })
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, bytes)
            .await
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl AccountStore for JsonFileAccountStore {
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

    #[tracing::instrument(name = "Adding account to JSON store", skip_all)]
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

        let key = username.to_string();
        let account = Account::new(username, nickname, credential);
        accounts.insert(key.clone(), account.clone());

        if let Err(e) = self.persist(&accounts).await {
            accounts.remove(&key);
            return Err(e);
        }

        Ok(account)
    }

    #[tracing::instrument(name = "Deleting account from JSON store", skip_all)]
    async fn delete(&self, account: &Account) {
        let mut accounts = self.accounts.write().await;
        let Some(removed) = accounts.remove(account.username().as_ref()) else {
            tracing::warn!(username = %account.username(), "Deleted account was not in the store");
            return;
        };

        if let Err(e) = self.persist(&accounts).await {
            tracing::error!(error = %e, username = %account.username(), "Failed to persist account deletion");
            // Keep memory in line with what is on disk.
            accounts.insert(removed.username().to_string(), removed);
        }
    }

    async fn list_all(&self) -> Result<Vec<Account>, AccountStoreError> {
        let accounts = self.accounts.read().await;
        let mut all: Vec<Account> = accounts.values().cloned().collect();
        all.sort_by(|a, b| a.username().as_ref().cmp(b.username().as_ref()));
        Ok(all)
    }
}
