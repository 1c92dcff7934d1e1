use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    account::Account, credential::Credential, nickname::Nickname, username::Username,
};

// AccountStore port trait and errors
#[derive(Debug, Error)]
pub enum AccountStoreError {
    #[error("Account already exists")]
    AccountAlreadyExists,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for AccountStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::AccountAlreadyExists, Self::AccountAlreadyExists)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn find_by_username(&self, username: &str)
    -> Result<Option<Account>, AccountStoreError>;

    /// Looks up the account whose username and stored credential both match.
    async fn find_authenticated(
        &self,
        username: &str,
        credential: &Credential,
    ) -> Result<Option<Account>, AccountStoreError>;

    async fn create(
        &self,
        username: Username,
        nickname: Nickname,
        credential: Credential,
    ) -> Result<Account, AccountStoreError>;

    /// Removes the account. Failures are logged by the store, not returned.
    async fn delete(&self, account: &Account);

    async fn list_all(&self) -> Result<Vec<Account>, AccountStoreError>;
}
