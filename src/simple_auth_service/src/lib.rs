mod account_service;
pub mod telemetry;

pub use account_service::{AccountService, AccountServiceError, ConfiguredAccountService};
pub use telemetry::init_tracing;
