use std::{collections::HashMap, path::PathBuf};

use config::{Config as ConfigLib, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub store: StoreConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Where the current CRL set is persisted between runs
    pub path: PathBuf,
    /// Write the set back to `path` after every installed update
    pub persist_updates: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Default tracing filter, overridden by `RUST_LOG`
    pub filter: String,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_sources(None)
    }

    pub fn load_with_sources(
        env_vars: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let mut builder = ConfigLib::builder()
            .set_default("store.path", "data/crl-set")?
            .set_default("store.persist_updates", true)?
            .set_default("log.filter", "info")?
            .add_source(File::with_name("config/settings").required(false));

        // Explicit overrides replace the process environment so tests do not
        // depend on variables set on the host
        if let Some(vars) = env_vars {
            for (key, value) in vars {
                builder = builder.set_override(&key, value)?;
            }
        } else {
            // Format: CRLSET_STORE__PATH, CRLSET_LOG__FILTER
            builder = builder.add_source(
                Environment::with_prefix("CRLSET")
                    .prefix_separator("_")
                    .separator("__"),
            );
        }

        builder.build()?.try_deserialize()
    }
}
