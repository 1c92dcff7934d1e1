pub mod session;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export for convenience
pub use session::SessionContext;
pub use use_cases::{
    DeleteAccountError, DeleteAccountUseCase, LoginError, LoginUseCase, SignupError,
    SignupUseCase,
};
