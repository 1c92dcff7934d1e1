//! # SimpleAuth - Account Service Library
//!
//! This is a facade crate that re-exports all public APIs from the account service components.
//! Use this crate to get access to signup, login and account deletion in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! simple_auth = { path = "../simple_auth" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Username`, `Nickname`, `Password`, `Account`, validators
//! - **Ports**: `AccountStore`, `CredentialHasher`
//! - **Use cases**: `SignupUseCase`, `LoginUseCase`, `DeleteAccountUseCase`
//! - **Adapters**: `HashMapAccountStore`, `JsonFileAccountStore`, `Sha256CredentialHasher`
//! - **Service**: `AccountService` - store, hasher and session wired together

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use simple_auth_core::*;
}

// Re-export most commonly used core types at the root level
pub use simple_auth_core::{
    Account, AccountProfile, Credential, Nickname, Password, Username, ValidationError,
    validate_nickname, validate_password, validate_username,
};

// ============================================================================
// Ports
// ============================================================================

pub use simple_auth_core::{AccountStore, AccountStoreError, CredentialHasher, HashingError};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use simple_auth_application::*;
}

// Re-export use cases at root level
pub use simple_auth_application::{
    DeleteAccountError, DeleteAccountUseCase, LoginError, LoginUseCase, SessionContext,
    SignupError, SignupUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Account store implementations
    pub mod persistence {
        pub use simple_auth_adapters::persistence::*;
    }

    /// Credential hashers
    pub mod hashing {
        pub use simple_auth_adapters::hashing::*;
    }

    /// Configuration
    pub mod config {
        pub use simple_auth_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use simple_auth_adapters::{
    config::Settings,
    hashing::Sha256CredentialHasher,
    persistence::{ConfiguredAccountStore, HashMapAccountStore, JsonFileAccountStore},
};

// ============================================================================
// Account Service (Main Entry Point)
// ============================================================================

/// Main account service
pub use simple_auth_service::{
    AccountService, AccountServiceError, ConfiguredAccountService, init_tracing,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing store traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
