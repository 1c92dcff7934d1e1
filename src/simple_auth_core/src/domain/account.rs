use super::{credential::Credential, nickname::Nickname, username::Username};

/// A persisted account record.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    username: Username,
    nickname: Nickname,
    credential: Credential,
}

impl Account {
    pub fn new(username: Username, nickname: Nickname, credential: Credential) -> Self {
        Self {
            username,
            nickname,
            credential,
        }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn nickname(&self) -> &Nickname {
        &self.nickname
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn credential_matches(&self, credential: &Credential) -> bool {
        &self.credential == credential
    }

    /// Credential-free view handed to presentation and session code.
    pub fn profile(&self) -> AccountProfile {
        AccountProfile {
            username: self.username.to_string(),
            nickname: self.nickname.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountProfile {
    pub username: String,
    pub nickname: String,
}
