use secrecy::{ExposeSecret, Secret};

use super::validation_error::{RuleViolations, ValidationError, char_len, has_whitespace};

pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_MAX_LENGTH: usize = 20;

/// Symbols a password may contain, and must contain at least one of.
pub const PASSWORD_SYMBOLS: &[char] = &['!', '@', '#', '$', '%', '^', '&', '*', '_'];

pub const PASSWORD_CHARSET_MESSAGE: &str =
    "password may only contain letters, digits and the symbols ! @ # $ % ^ & * _";
pub const PASSWORD_UPPERCASE_MESSAGE: &str = "password must contain at least one uppercase letter";
pub const PASSWORD_LOWERCASE_MESSAGE: &str = "password must contain at least one lowercase letter";
pub const PASSWORD_DIGIT_MESSAGE: &str = "password must contain at least one digit";
pub const PASSWORD_SYMBOL_MESSAGE: &str =
    "password must contain at least one symbol (! @ # $ % ^ & * _)";
pub const PASSWORD_WHITESPACE_MESSAGE: &str = "password must not contain whitespace";
pub const PASSWORD_LENGTH_MESSAGE: &str = "password must be between 8 and 20 characters";

fn is_password_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || PASSWORD_SYMBOLS.contains(&c)
}

/// Checks every password rule and reports all that fail.
///
/// Order: charset, composition (upper, lower, digit, symbol), whitespace,
/// length.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    let mut violations = RuleViolations::default();

    violations.check(
        password.is_empty() || !password.chars().all(is_password_char),
        PASSWORD_CHARSET_MESSAGE,
    );
    violations.check(
        !password.chars().any(|c| c.is_ascii_uppercase()),
        PASSWORD_UPPERCASE_MESSAGE,
    );
    violations.check(
        !password.chars().any(|c| c.is_ascii_lowercase()),
        PASSWORD_LOWERCASE_MESSAGE,
    );
    violations.check(
        !password.chars().any(|c| c.is_ascii_digit()),
        PASSWORD_DIGIT_MESSAGE,
    );
    violations.check(
        !password.chars().any(|c| PASSWORD_SYMBOLS.contains(&c)),
        PASSWORD_SYMBOL_MESSAGE,
    );
    violations.check(has_whitespace(password), PASSWORD_WHITESPACE_MESSAGE);

    let len = char_len(password);
    violations.check(
        !(PASSWORD_MIN_LENGTH..=PASSWORD_MAX_LENGTH).contains(&len),
        PASSWORD_LENGTH_MESSAGE,
    );

    violations.finish()
}

/// A plaintext password that passed [`validate_password`].
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl TryFrom<Secret<String>> for Password {
    type Error = ValidationError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        validate_password(value.expose_secret())?;
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}
