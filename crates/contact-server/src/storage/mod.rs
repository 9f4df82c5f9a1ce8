//! Storage backends
//!
//! Two engines implement the same [`ContactStore`] port: an embedded SQLite
//! file and a networked PostgreSQL server. The choice between them is made
//! exactly once, here, from the parsed configuration.

pub mod postgres;
pub mod sqlite;

pub use postgres::PgStore;
pub use sqlite::SqliteStore;

use crate::config::BackendConfig;
use contact_core::{ContactStore, Result};
use std::sync::Arc;

/// Build the configured backend and run its startup schema step.
pub async fn from_config(backend: &BackendConfig) -> Result<Arc<dyn ContactStore>> {
    match backend {
        BackendConfig::Sqlite { path } => Ok(Arc::new(SqliteStore::init(path).await?)),
        BackendConfig::Postgres(config) => Ok(Arc::new(PgStore::init(config.clone()).await)),
    }
}
