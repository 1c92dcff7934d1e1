use std::{fmt, sync::LazyLock};

use regex::Regex;

use super::validation_error::{
    RuleViolations, ValidationError, char_len, has_whitespace, is_all_digits,
};

pub const USERNAME_MIN_LENGTH: usize = 4;
pub const USERNAME_MAX_LENGTH: usize = 50;

pub const USERNAME_FORMAT_MESSAGE: &str = "username must be a well-formed email address";
pub const USERNAME_WHITESPACE_MESSAGE: &str = "username must not contain whitespace";
pub const USERNAME_LENGTH_MESSAGE: &str = "username must be between 4 and 50 characters";
pub const USERNAME_ALL_DIGITS_MESSAGE: &str = "username must not consist of digits only";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Checks every username rule and reports all that fail.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    let mut violations = RuleViolations::default();

    violations.check(!EMAIL_PATTERN.is_match(username), USERNAME_FORMAT_MESSAGE);
    violations.check(has_whitespace(username), USERNAME_WHITESPACE_MESSAGE);

    let len = char_len(username);
    violations.check(
        !(USERNAME_MIN_LENGTH..=USERNAME_MAX_LENGTH).contains(&len),
        USERNAME_LENGTH_MESSAGE,
    );
    violations.check(is_all_digits(username), USERNAME_ALL_DIGITS_MESSAGE);

    violations.finish()
}

/// An email-shaped account identifier that passed [`validate_username`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl TryFrom<String> for Username {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_username(&value)?;
        Ok(Self(value))
    }
}

impl TryFrom<&str> for Username {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_owned())
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}
