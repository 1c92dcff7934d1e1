use secrecy::Secret;
use thiserror::Error;

use crate::domain::credential::Credential;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HashingError {
    #[error("Password encryption failed")]
    EncryptionFailed,
}

/// Deterministic one-way transform from a plaintext password to the
/// credential kept in the account store.
pub trait CredentialHasher: Send + Sync {
    fn hash(&self, plaintext: &Secret<String>) -> Result<Credential, HashingError>;
}
