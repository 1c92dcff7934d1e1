/// Every rule a piece of user input broke, in reporting order.
///
/// Validators never stop at the first violation, so a caller can show the
/// user all of them at once. `Display` joins the messages with newlines.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", .messages.join("\n"))]
pub struct ValidationError {
    messages: Vec<String>,
}

impl ValidationError {
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

/// Collects violated rules for a single field.
#[derive(Debug, Default)]
pub(crate) struct RuleViolations {
    messages: Vec<String>,
}

impl RuleViolations {
    pub(crate) fn check(&mut self, violated: bool, message: &str) {
        if violated {
            self.messages.push(message.to_owned());
        }
    }

    pub(crate) fn finish(self) -> Result<(), ValidationError> {
        if self.messages.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(self.messages))
        }
    }
}

/// Length in characters, not bytes.
pub(crate) fn char_len(input: &str) -> usize {
    input.chars().count()
}

pub(crate) fn has_whitespace(input: &str) -> bool {
    input.chars().any(char::is_whitespace)
}

pub(crate) fn is_all_digits(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|c| c.is_ascii_digit())
}
