pub mod account;
pub mod credential;
pub mod nickname;
pub mod password;
pub mod username;
pub mod validation_error;
