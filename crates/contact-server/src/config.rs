//! Environment configuration
//!
//! All configuration comes from the process environment, read once at
//! startup.

use contact_core::{ContactError, Result};
use std::path::PathBuf;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";
const DEFAULT_SQLITE_PATH: &str = "/tmp/contacts.db";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub backend: BackendConfig,
}

/// Which storage engine to run against, resolved exactly once at startup.
#[derive(Debug, Clone)]
pub enum BackendConfig {
    /// Embedded engine writing to a single local file.
    Sqlite { path: PathBuf },
    /// Client/server engine reached over the network.
    Postgres(PgConfig),
}

#[derive(Debug, Clone)]
pub struct PgConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub dbname: String,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// `USE_POSTGRES=1` selects the networked engine; any other value or
    /// absence selects the embedded engine. The four `DB_*` entries are
    /// required only when the networked engine is selected, and a missing
    /// one is a fatal startup error.
    pub fn from_env() -> Result<Self> {
        let bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());

        let use_postgres = std::env::var("USE_POSTGRES")
            .map(|v| v == "1")
            .unwrap_or(false);

        let backend = if use_postgres {
            BackendConfig::Postgres(PgConfig {
                host: require("DB_HOST")?,
                user: require("DB_USER")?,
                password: require("DB_PASSWORD")?,
                dbname: require("DB_NAME")?,
            })
        } else {
            let path = std::env::var("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SQLITE_PATH));
            BackendConfig::Sqlite { path }
        };

        Ok(Self {
            bind_address,
            backend,
        })
    }
}

fn require(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| ContactError::Config(format!("{} must be set when USE_POSTGRES=1", key)))
}
