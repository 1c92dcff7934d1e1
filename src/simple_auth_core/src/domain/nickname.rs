use std::fmt;

use super::validation_error::{
    RuleViolations, ValidationError, char_len, has_whitespace, is_all_digits,
};

pub const NICKNAME_MIN_LENGTH: usize = 3;
pub const NICKNAME_MAX_LENGTH: usize = 20;

pub const NICKNAME_CHARSET_MESSAGE: &str =
    "nickname may only contain letters, digits, underscore (_) and hyphen (-)";
pub const NICKNAME_WHITESPACE_MESSAGE: &str = "nickname must not contain whitespace";
pub const NICKNAME_LENGTH_MESSAGE: &str = "nickname must be between 3 and 20 characters";
pub const NICKNAME_ALL_DIGITS_MESSAGE: &str = "nickname must not consist of digits only";

fn is_nickname_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Checks every nickname rule and reports all that fail.
pub fn validate_nickname(nickname: &str) -> Result<(), ValidationError> {
    let mut violations = RuleViolations::default();

    violations.check(
        nickname.is_empty() || !nickname.chars().all(is_nickname_char),
        NICKNAME_CHARSET_MESSAGE,
    );
    violations.check(has_whitespace(nickname), NICKNAME_WHITESPACE_MESSAGE);

    let len = char_len(nickname);
    violations.check(
        !(NICKNAME_MIN_LENGTH..=NICKNAME_MAX_LENGTH).contains(&len),
        NICKNAME_LENGTH_MESSAGE,
    );
    violations.check(is_all_digits(nickname), NICKNAME_ALL_DIGITS_MESSAGE);

    violations.finish()
}

/// Display label of an account. Not unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Nickname(String);

impl TryFrom<String> for Nickname {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_nickname(&value)?;
        Ok(Self(value))
    }
}

impl TryFrom<&str> for Nickname {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_owned())
    }
}

impl AsRef<str> for Nickname {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Nickname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
