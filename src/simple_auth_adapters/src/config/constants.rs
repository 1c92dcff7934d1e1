/// Environment variables are `SIMPLE_AUTH_<SECTION>__<KEY>`, e.g.
/// `SIMPLE_AUTH_STORE__BACKEND=file`.
pub mod env {
    pub const ENV_PREFIX: &str = "SIMPLE_AUTH";
    pub const ENV_SEPARATOR: &str = "__";
}

pub const CONFIG_DIR: &str = "config";
pub const DEFAULT_STORE_PATH: &str = "data/accounts.json";
pub const DEFAULT_LOG_FILTER: &str = "info";
