pub mod configured_account_store;
pub mod hashmap_account_store;
pub mod json_file_account_store;

pub use configured_account_store::ConfiguredAccountStore;
pub use hashmap_account_store::HashMapAccountStore;
pub use json_file_account_store::JsonFileAccountStore;
