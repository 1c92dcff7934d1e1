use secrecy::Secret;
use simple_auth_adapters::{
    config::Settings, hashing::Sha256CredentialHasher, persistence::ConfiguredAccountStore,
};
use simple_auth_application::{
    DeleteAccountError, DeleteAccountUseCase, LoginError, LoginUseCase, SessionContext,
    SignupError, SignupUseCase,
};
use simple_auth_core::{AccountProfile, AccountStore, AccountStoreError, CredentialHasher};
use tokio::sync::RwLock;

#[derive(Debug, thiserror::Error)]
pub enum AccountServiceError {
    #[error(transparent)]
    Signup(#[from] SignupError),
    #[error(transparent)]
    Login(#[from] LoginError),
    #[error(transparent)]
    DeleteAccount(#[from] DeleteAccountError),
    #[error("no signed-in account")]
    NoSignedInAccount,
    #[error("store operation failed")]
    Store(#[from] AccountStoreError),
}

impl AccountServiceError {
    /// Reasons to show the user; join with newlines for a single alert.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Signup(e) => e.messages(),
            Self::Login(e) => e.messages(),
            Self::DeleteAccount(e) => e.messages(),
            other => vec![other.to_string()],
        }
    }
}

/// Entry point for account operations
///
/// Owns the account store, the credential hasher and the current session.
/// Use cases are built per call and borrow the store and hasher.
pub struct AccountService<S, H>
where
    S: AccountStore,
    H: CredentialHasher,
{
    account_store: S,
    hasher: H,
    session: RwLock<SessionContext>,
}

/// Service wired from configuration.
pub type ConfiguredAccountService = AccountService<ConfiguredAccountStore, Sha256CredentialHasher>;

impl ConfiguredAccountService {
    /// Builds the service with the store selected in `settings`.
    pub async fn from_settings(settings: &Settings) -> Result<Self, AccountStoreError> {
        let account_store = ConfiguredAccountStore::from_settings(&settings.store).await?;
        Ok(Self::new(account_store, Sha256CredentialHasher::new()))
    }
}

impl<S, H> AccountService<S, H>
where
    S: AccountStore,
    H: CredentialHasher,
{
    pub fn new(account_store: S, hasher: H) -> Self {
        Self {
            account_store,
            hasher,
            session: RwLock::new(SessionContext::new()),
        }
    }

    pub fn account_store(&self) -> &S {
        &self.account_store
    }

    pub async fn signup(
        &self,
        username: String,
        nickname: String,
        password: Secret<String>,
    ) -> Result<(), AccountServiceError> {
        SignupUseCase::new(&self.account_store, &self.hasher)
            .execute(username, nickname, password)
            .await?;
        Ok(())
    }

    /// Authenticates and starts a session for the account.
    pub async fn login(
        &self,
        username: String,
        password: Secret<String>,
    ) -> Result<AccountProfile, AccountServiceError> {
        let account = LoginUseCase::new(&self.account_store, &self.hasher)
            .execute(username, password)
            .await?;

        let profile = account.profile();
        self.session.write().await.begin(profile.clone());
        Ok(profile)
    }

    /// Ends the current session. Returns whether one was active.
    pub async fn logout(&self) -> bool {
        self.session.write().await.clear().is_some()
    }

    pub async fn current_user(&self) -> Option<AccountProfile> {
        self.session.read().await.current().cloned()
    }

    /// Deletes the signed-in account and ends the session.
    #[tracing::instrument(name = "AccountService::delete_current_account", skip(self))]
    pub async fn delete_current_account(&self) -> Result<bool, AccountServiceError> {
        let mut session = self.session.write().await;
        let username = session
            .current()
            .map(|profile| profile.username.clone())
            .ok_or(AccountServiceError::NoSignedInAccount)?;

        let deleted = DeleteAccountUseCase::new(&self.account_store)
            .execute(username)
            .await?;
        session.clear();
        Ok(deleted)
    }

    /// Deletes any account by username. Ends the session if it was that account's.
    pub async fn delete_account(&self, username: String) -> Result<bool, AccountServiceError> {
        let mut session = self.session.write().await;
        let signed_in = session.belongs_to(&username);

        let deleted = DeleteAccountUseCase::new(&self.account_store)
            .execute(username)
            .await?;
        if signed_in {
            session.clear();
        }
        Ok(deleted)
    }

    /// Every stored account, without credentials.
    pub async fn accounts(&self) -> Result<Vec<AccountProfile>, AccountServiceError> {
        let accounts = self.account_store.list_all().await?;
        Ok(accounts.iter().map(|account| account.profile()).collect())
    }
}
