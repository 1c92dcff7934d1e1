use simple_auth_core::{
    Account, AccountStore, AccountStoreError, Credential, Nickname, Username,
};

use crate::config::{StoreBackend, StoreSettings};

use super::{HashMapAccountStore, JsonFileAccountStore};

/// Account store picked at startup from [`StoreSettings`].
#[derive(Clone)]
pub enum ConfiguredAccountStore {
    Memory(HashMapAccountStore),
    File(JsonFileAccountStore),
}

impl ConfiguredAccountStore {
    pub async fn from_settings(settings: &StoreSettings) -> Result<Self, AccountStoreError> {
        match settings.backend {
            StoreBackend::Memory => Ok(Self::Memory(HashMapAccountStore::new())),
            StoreBackend::File => Ok(Self::File(
                JsonFileAccountStore::open(&settings.path).await?,
            )),
        }
    }
}

#[async_trait::async_trait]
impl AccountStore for ConfiguredAccountStore {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, AccountStoreError> {
        match self {
            Self::Memory(store) => store.find_by_username(username).await,
            Self::File(store) => store.find_by_username(username).await,
        }
    }

    async fn find_authenticated(
        &self,
        username: &str,
        credential: &Credential,
    ) -> Result<Option<Account>, AccountStoreError> {
        match self {
            Self::Memory(store) => store.find_authenticated(username, credential).await,
            Self::File(store) => store.find_authenticated(username, credential).await,
        }
    }

    async fn create(
        &self,
        username: Username,
        nickname: Nickname,
        credential: Credential,
    ) -> Result<Account, AccountStoreError> {
        match self {
            Self::Memory(store) => store.create(username, nickname, credential).await,
            Self::File(store) => store.create(username, nickname, credential).await,
        }
    }

    async fn delete(&self, account: &Account) {
        match self {
            Self::Memory(store) => store.delete(account).await,
            Self::File(store) => store.delete(account).await,
        }
    }

    async fn list_all(&self) -> Result<Vec<Account>, AccountStoreError> {
        match self {
            Self::Memory(store) => store.list_all().await,
            Self::File(store) => store.list_all().await,
        }
    }
}
