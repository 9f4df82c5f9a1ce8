//! Embedded SQLite backend (single local file, no server process)

use async_trait::async_trait;
use contact_core::{zip_rows, ContactError, ContactStore, Result, Submission};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{Column, ConnectOptions, Connection, Row};
use std::path::{Path, PathBuf};

pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Open the store and make sure the schema exists.
    ///
    /// A schema failure here aborts startup; the embedded engine has no
    /// degraded mode.
    pub async fn init(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    ContactError::Config(format!(
                        "Failed to create database directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let store = Self {
            path: path.to_path_buf(),
        };
        store.ensure_schema().await?;

        tracing::info!("SQLite store initialized at: {}", store.path.display());
        Ok(store)
    }

    /// Fresh connection per operation; callers close it when done.
    async fn connect(&self) -> Result<SqliteConnection> {
        SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(true)
            .connect()
            .await
            .map_err(|e| ContactError::Connection(e.to_string()))
    }
}

#[async_trait]
impl ContactStore for SqliteStore {
    async fn ensure_schema(&self) -> Result<()> {
        let mut conn = self.connect().await?;

        sqlx::query("CREATE TABLE IF NOT EXISTS contacts (name TEXT, email TEXT, message TEXT)")
            .execute(&mut conn)
            .await
            .map_err(|e| ContactError::Schema(e.to_string()))?;

        conn.close()
            .await
            .map_err(|e| ContactError::Connection(e.to_string()))
    }

    async fn insert(&self, name: &str, email: &str, message: &str) -> Result<()> {
        let mut conn = self.connect().await?;

        sqlx::query("INSERT INTO contacts (name, email, message) VALUES (?1, ?2, ?3)")
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

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteStore::init(&dir.path().join("contacts.db"))
            .await
            .unwrap();

        store.ensure_schema().await.unwrap();
        store.ensure_schema().await.unwrap();

        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_then_list_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteStore::init(&dir.path().join("contacts.db"))
            .await
            .unwrap();

        store.insert("Bob", "bob@x.com", "Hello").await.unwrap();
        store.insert("Ann", "", "hi").await.unwrap();

        let rows = store.list_all().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], Submission::new("Bob", "bob@x.com", "Hello"));
        assert_eq!(rows[1], Submission::new("Ann", "", "hi"));
    }

    #[tokio::test]
    async fn test_init_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/data/contacts.db");
        let store = SqliteStore::init(&path).await.unwrap();

        store.insert("Bob", "bob@x.com", "Hello").await.unwrap();
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }
}
