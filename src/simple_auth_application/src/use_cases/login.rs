use secrecy::Secret;
use simple_auth_core::{Account, AccountStore, AccountStoreError, CredentialHasher, HashingError};

/// Error types specific to login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("hashing failed")]
    HashingFailed(#[source] HashingError),
    #[error("no matching account")]
    NoMatchingAccount,
    /// The store answered with an account for a different username.
    #[error("bad request")]
    BadRequest,
    #[error("store operation failed")]
    StoreOperationFailed(#[from] AccountStoreError),
}

impl LoginError {
    pub fn messages(&self) -> Vec<String> {
        vec![self.to_string()]
    }
}

/// Login use case - handles account authentication
pub struct LoginUseCase<'a, S, H>
where
    S: AccountStore,
    H: CredentialHasher,
{
    account_store: &'a S,
    hasher: &'a H,
}

impl<'a, S, H> LoginUseCase<'a, S, H>
where
    S: AccountStore,
    H: CredentialHasher,
{
    pub fn new(account_store: &'a S, hasher: &'a H) -> Self {
        Self {
            account_store,
            hasher,
        }
    }

    /// Execute the login use case
    ///
    /// # Arguments
    /// * `username` - Username as typed; not validated
    /// * `password` - Plaintext password as typed; not validated
    ///
    /// # Returns
    /// The matched account, or LoginError
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        username: String,
        password: Secret<String>,
    ) -> Result<Account, LoginError> {
        let credential = self
            .hasher
            .hash(&password)
            .map_err(LoginError::HashingFailed)?;

        let account = self
            .account_store
            .find_authenticated(&username, &credential)
            .await?
            .ok_or(LoginError::NoMatchingAccount)?;

        if account.username().as_ref() != username {
            tracing::warn!(
                returned = %account.username(),
                "Account store returned an account for another username"
            );
            return Err(LoginError::BadRequest);
        }

        tracing::debug!("Authentication succeeded");
        Ok(account)
    }
}
