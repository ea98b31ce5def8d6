use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_SEED_URL: &str = "https://s3.amazonaws.com/roxiler.com/product_transaction.json";

pub struct Config {
    pub mongo_uri: String,
    pub db_name: String,
    pub collection_name: String,
    pub seed_url: String,
    pub bind_addr: SocketAddr,
    pub static_dir: Option<PathBuf>,
    pub seed_on_startup: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source so it can be exercised without
    /// touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:1001".to_string());
        let bind_addr: SocketAddr = bind_addr.parse().map_err(|_| ConfigError::Invalid {
            key: "BIND_ADDR",
            value: bind_addr.clone(),
        })?;

        let seed_on_startup = match lookup("SEED_ON_STARTUP") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                key: "SEED_ON_STARTUP",
                value,
            })?,
            None => false,
        };

        Ok(Self {
            mongo_uri: required("MONGO_URI")?,
            db_name: required("DB_NAME")?,
            collection_name: lookup("COLLECTION_NAME").unwrap_or_else(|| "transactions".to_string()),
            seed_url: lookup("SEED_URL").unwrap_or_else(|| DEFAULT_SEED_URL.to_string()),
            bind_addr,
            static_dir: lookup("STATIC_DIR").map(PathBuf::from),
            seed_on_startup,
        })
    }
}
