//! Submission workflow

use contact_core::{ContactStore, Result, Submission};
use std::sync::Arc;
use tracing::info;

/// Orchestrates the two request flows over whichever store was selected at
/// startup.
pub struct SubmissionService {
    store: Arc<dyn ContactStore>,
}

impl SubmissionService {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store }
    }

    /// Persist one submission and produce the confirmation line.
    pub async fn submit(&self, submission: &Submission) -> Result<String> {
        info!("Storing submission from: {}", submission.name);

        self.store
            .insert(&submission.name, &submission.email, &submission.message)
            .await?;

        Ok(format!(
            "Thank you, {}. Your information has been added successfully.",
            submission.name
        ))
    }

    /// Every stored submission in store-returned order.
    pub async fn list(&self) -> Result<Vec<Submission>> {
        self.store.list_all().await
    }
}
