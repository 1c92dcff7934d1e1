use secrecy::{ExposeSecret, Secret};

/// Stored one-way hash of a password. Never the plaintext.
#[derive(Debug, Clone)]
pub struct Credential(Secret<String>);

impl Credential {
    pub fn new(hash: String) -> Self {
        Self(Secret::new(hash))
    }
}

impl AsRef<Secret<String>> for Credential {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Credential {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Credential {}
