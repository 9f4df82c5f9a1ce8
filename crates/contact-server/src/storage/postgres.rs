//! Networked PostgreSQL backend (client/server, env-provided credentials)

use crate::config::PgConfig;
use async_trait::async_trait;
use contact_core::{zip_rows, ContactError, ContactStore, Result, Submission};
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::{Column, ConnectOptions, Connection, Row};

pub struct PgStore {
    config: PgConfig,
}

impl PgStore {
    /// Open the store and attempt the startup schema step.
    ///
    /// A schema failure is logged and the store is returned anyway; every
    /// request against the missing table then fails on its own. This is the
    /// service's long-standing startup contract.
    pub async fn init(config: PgConfig) -> Self {
        let store = Self { config };

        match store.ensure_schema().await {
            Ok(()) => {
                tracing::info!(
                    "PostgreSQL store initialized at host: {}",
                    store.config.host
                );
            }
            Err(e) => {
                tracing::error!("Error initializing PostgreSQL: {}", e);
            }
        }

        store
    }

    /// Fresh connection per operation; callers close it when done.
    async fn connect(&self) -> Result<PgConnection> {
        PgConnectOptions::new()
            .host(&self.config.host)
            .username(&self.config.user)
            .password(&self.config.password)
            .database(&self.config.dbname)
            .connect()
            .await
            .map_err(|e| ContactError::Connection(e.to_string()))
    }
}

#[async_trait]
impl ContactStore for PgStore {
    async fn ensure_schema(&self) -> Result<()> {
        let mut conn = self.connect().await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS contacts (
                id SERIAL PRIMARY KEY,
                name VARCHAR(255),
                email VARCHAR(255),
                message TEXT
            )
            "#,
        )
        .execute(&mut conn)
        .await
        .map_err(|e| ContactError::Schema(e.to_string()))?;

        conn.close()
            .await
            .map_err(|e| ContactError::Connection(e.to_string()))
    }

    async fn insert(&self, name: &str, email: &str, message: &str) -> Result<()> {
        let mut conn = self.connect().await?;

        sqlx::query("INSERT INTO contacts (name, email, message) VALUES ($1, $2, $3)")
            .bind(name)
            .bind(email)
            .bind(message)
            .execute(&mut conn)
            .await
            .map_err(|e| ContactError::Write(e.to_string()))?;

        conn.close()
            .await
            .map_err(|e| ContactError::Connection(e.to_string()))
    }

    async fn list_all(&self) -> Result<Vec<Submission>> {
        let mut conn = self.connect().await?;

        let rows = sqlx::query("SELECT name, email, message FROM contacts")
            .fetch_all(&mut conn)
            .await
            .map_err(|e| ContactError::Read(e.to_string()))?;

        conn.close()
            .await
            .map_err(|e| ContactError::Connection(e.to_string()))?;

        let columns: Vec<String> = rows
            .first()
            .map(|row| row.columns().iter().map(|c| c.name().to_string()).collect())
            .unwrap_or_default();

        let mut values = Vec::with_capacity(rows.len());
        for row in &rows {
            let mut fields = Vec::with_capacity(row.len());
            for index in 0..row.len() {
                // NULLs left by other writers read back as empty strings
                let field: Option<String> = row
                    .try_get(index)
                    .map_err(|e| ContactError::Read(e.to_string()))?;
                fields.push(field.unwrap_or_default());
            }
            values.push(fields);
        }

        Ok(zip_rows(&columns, values)
            .iter()
            .map(Submission::from_record)
            .collect())
    }
}
