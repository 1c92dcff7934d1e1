use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::constants::{CONFIG_DIR, DEFAULT_LOG_FILTER, DEFAULT_STORE_PATH, env};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub store: StoreSettings,
    pub telemetry: TelemetrySettings,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Memory,
    File,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    pub backend: StoreBackend,
    /// Only read by the file backend.
    pub path: PathBuf,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            path: PathBuf::from(DEFAULT_STORE_PATH),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TelemetrySettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Settings {
    /// Loads `.env`, then `config/default` and `config/local`, then
    /// `SIMPLE_AUTH_*` environment variables. Later sources win.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!(error = %e, "Ignoring unreadable .env file");
            }
        }
        Self::load_from(Path::new(CONFIG_DIR))
    }

    /// Same as [`Settings::load`] with config files looked up in `dir`,
    /// without touching `.env`.
    pub fn load_from(dir: &Path) -> Result<Self, ::config::ConfigError> {
        let default_file = dir.join("default");
        let local_file = dir.join("local");

        let config = ::config::Config::builder()
            .add_source(::config::File::with_name(&default_file.to_string_lossy()).required(false))
            .add_source(::config::File::with_name(&local_file.to_string_lossy()).required(false))
            .add_source(
                ::config::Environment::with_prefix(env::ENV_PREFIX)
                    .prefix_separator("_")
                    .separator(env::ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
