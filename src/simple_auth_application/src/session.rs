use simple_auth_core::AccountProfile;

/// The signed-in account, if any.
///
/// Holds the profile only; passwords and credentials never enter the session.
#[derive(Debug, Default)]
pub struct SessionContext {
    current: Option<AccountProfile>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session, returning the one it replaced.
    pub fn begin(&mut self, profile: AccountProfile) -> Option<AccountProfile> {
        tracing::debug!(username = %profile.username, "Session started");
        self.current.replace(profile)
    }

    pub fn current(&self) -> Option<&AccountProfile> {
        self.current.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    pub fn belongs_to(&self, username: &str) -> bool {
        self.current
            .as_ref()
            .is_some_and(|profile| profile.username == username)
    }

    /// Ends the session, returning the profile that was signed in.
    pub fn clear(&mut self) -> Option<AccountProfile> {
        self.current.take()
    }
}
