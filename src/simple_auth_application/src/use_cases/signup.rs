use secrecy::Secret;
use simple_auth_core::{
    AccountStore, AccountStoreError, CredentialHasher, HashingError, Nickname, Password,
    Username, ValidationError,
};

/// Error types specific to signup use case
#[derive(Debug, thiserror::Error)]
pub enum SignupError {
    #[error(transparent)]
    InvalidInput(#[from] ValidationError),
    #[error("username unavailable")]
    UsernameUnavailable,
    #[error("hashing failed")]
    HashingFailed(#[source] HashingError),
    #[error("account creation failed")]
    AccountCreationFailed(#[source] AccountStoreError),
    #[error("store operation failed")]
    StoreOperationFailed(#[source] AccountStoreError),
}

impl SignupError {
    /// User-facing reasons, one per line of `Display`.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::InvalidInput(e) => e.messages().to_vec(),
            other => vec![other.to_string()],
        }
    }
}

/// Signup use case - handles account registration
pub struct SignupUseCase<'a, S, H>
where
    S: AccountStore,
    H: CredentialHasher,
{
    account_store: &'a S,
    hasher: &'a H,
}

impl<'a, S, H> SignupUseCase<'a, S, H>
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

    /// Execute the signup use case
    ///
    /// Each step short-circuits: username rules, username availability,
    /// nickname rules, password rules, hashing, then the store write.
    /// Within one field every broken rule is reported.
    #[tracing::instrument(name = "SignupUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        username: String,
        nickname: String,
        password: Secret<String>,
    ) -> Result<(), SignupError> {
        let username = Username::try_from(username)
            .inspect_err(|e| tracing::debug!(reasons = %e, "Username rejected"))?;

        let existing = self
            .account_store
            .find_by_username(username.as_ref())
            .await
            .map_err(SignupError::StoreOperationFailed)?;
        if existing.is_some() {
            tracing::debug!("Username already taken");
            return Err(SignupError::UsernameUnavailable);
        }

        let nickname = Nickname::try_from(nickname)
            .inspect_err(|e| tracing::debug!(reasons = %e, "Nickname rejected"))?;
        let password = Password::try_from(password)
            .inspect_err(|e| tracing::debug!(reasons = %e, "Password rejected"))?;

        let credential = self
            .hasher
            .hash(password.as_ref())
            .map_err(SignupError::HashingFailed)?;

        self.account_store
            .create(username, nickname, credential)
            .await
            .map_err(|e| match e {
                AccountStoreError::AccountAlreadyExists => SignupError::UsernameUnavailable,
                other => {
                    tracing::error!(error = %other, "Account store did not create the account");
                    SignupError::AccountCreationFailed(other)
                }
            })?;

        Ok(())
    }
}
