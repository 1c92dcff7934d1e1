pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    account::{Account, AccountProfile},
    credential::Credential,
    nickname::{Nickname, validate_nickname},
    password::{Password, validate_password},
    username::{Username, validate_username},
    validation_error::ValidationError,
};

pub use ports::{
    repositories::{AccountStore, AccountStoreError},
    services::{CredentialHasher, HashingError},
};
