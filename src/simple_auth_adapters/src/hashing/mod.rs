pub mod sha256_credential_hasher;

pub use sha256_credential_hasher::Sha256CredentialHasher;
