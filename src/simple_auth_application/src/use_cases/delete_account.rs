use simple_auth_core::{AccountStore, AccountStoreError};

/// Error types for delete account use case
#[derive(Debug, thiserror::Error)]
pub enum DeleteAccountError {
    #[error("no matching account")]
    NoMatchingAccount,
    #[error("store operation failed")]
    StoreOperationFailed(#[from] AccountStoreError),
}

impl DeleteAccountError {
    pub fn messages(&self) -> Vec<String> {
        vec![self.to_string()]
    }
}

/// Delete account use case - removes an account
pub struct DeleteAccountUseCase<'a, S>
where
    S: AccountStore,
{
    account_store: &'a S,
}

impl<'a, S> DeleteAccountUseCase<'a, S>
where
    S: AccountStore,
{
    pub fn new(account_store: &'a S) -> Self {
        Self { account_store }
    }

    /// Execute the delete account use case
    ///
    /// # Returns
    /// Ok(true) once the account is gone, or DeleteAccountError
    #[tracing::instrument(name = "DeleteAccountUseCase::execute", skip(self))]
    pub async fn execute(&self, username: String) -> Result<bool, DeleteAccountError> {
        let account = self
            .account_store
            .find_by_username(&username)
            .await?
            .ok_or(DeleteAccountError::NoMatchingAccount)?;

        self.account_store.delete(&account).await;

        Ok(true)
    }
}
