//! Storage port for submissions

use crate::types::Submission;
use crate::Result;
use async_trait::async_trait;

/// A SQL store holding the `contacts` relation.
///
/// Implementations open a fresh connection per operation and close it
/// before returning; there is no pooling and no shared handle.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Create the `contacts` relation if absent. Safe to call on every
    /// process start.
    async fn ensure_schema(&self) -> Result<()>;

    /// Append one row. Fields are bound as statement parameters, never
    /// interpolated into the SQL text.
    async fn insert(&self, name: &str, email: &str, message: &str) -> Result<()>;

    /// Fetch every stored submission in store-returned order.
    async fn list_all(&self) -> Result<Vec<Submission>>;
}
