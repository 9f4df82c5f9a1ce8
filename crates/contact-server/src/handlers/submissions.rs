//! Submission handlers

use crate::AppState;
use axum::{extract::State, http::StatusCode, response::Html, Json};
use contact_core::Submission;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    message: String,
}

pub async fn submit(
    State(state): State<AppState>,
    Json(submission): Json<Submission>,
) -> Result<Json<SubmitResponse>, StatusCode> {
    match state.service.submit(&submission).await {
        Ok(message) => Ok(Json(SubmitResponse { message })),
        Err(e) => {
            tracing::error!("Failed to store submission: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn list(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    match state.service.list().await {
        Ok(submissions) => Ok(Html(render_listing(&submissions))),
        Err(e) => {
            tracing::error!("Failed to list submissions: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

// Field values are embedded verbatim, unescaped.
fn render_listing(submissions: &[Submission]) -> String {
    let mut html = String::from("<h1>Submissions</h1><ul>");
    for submission in submissions {
        html.push_str(&format!(
            "<li>{} - {} - {}</li>",
            submission.name, submission.email, submission.message
        ));
    }
    html.push_str("</ul>");
    html
}
