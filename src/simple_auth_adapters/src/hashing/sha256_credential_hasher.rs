use secrecy::{ExposeSecret, Secret};
use sha2::{Digest, Sha256};
use simple_auth_core::{Credential, CredentialHasher, HashingError};

/// Unsalted SHA-256 of the UTF-8 password bytes, as 64 lowercase hex chars.
///
/// The same password always yields the same credential; login relies on
/// that to look accounts up by `(username, credential)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256CredentialHasher;

impl Sha256CredentialHasher {
    pub fn new() -> Self {
        Self
    }
}

impl CredentialHasher for Sha256CredentialHasher {
    fn hash(&self, plaintext: &Secret<String>) -> Result<Credential, HashingError> {
        let digest = Sha256::digest(plaintext.expose_secret().as_bytes());
        Ok(Credential::new(hex::encode(digest)))
    }
}
