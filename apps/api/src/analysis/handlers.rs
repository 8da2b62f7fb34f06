//! Axum route handler for the Analysis API.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::analysis::compose::compose;
use crate::analysis::extract::extract;
use crate::analysis::normalize::normalize;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// The agent's report, rendered verbatim by the page.
    pub analysis: String,
}

/// POST /api/v1/analyze
///
/// Multipart form: `resume` (PDF file) + `job_description` (text field).
/// One synchronous pipeline per submission:
/// extract → normalize (config-gated) → compose → agent call.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut resume_bytes: Option<bytes::Bytes> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        match field.name() {
            Some("resume") => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read resume upload: {e}")))?;
                resume_bytes = Some(data);
            }
            Some("job_description") => {
                let text = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read job description: {e}"))
                })?;
                job_description = Some(text);
            }
            _ => {} // unknown fields ignored
        }
    }

    let resume_bytes = resume_bytes
        .filter(|b| !b.is_empty())
        .ok_or_else(|| AppError::Validation("A resume PDF upload is required".to_string()))?;
    let job_description = job_description
        .ok_or_else(|| AppError::Validation("job_description is required".to_string()))?;
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let resume_text = extract(&resume_bytes)?;
    // Surface the image-only / no-text-layer case instead of silently asking
    // the agent to audit an empty resume.
    if resume_text.trim().is_empty() {
        return Err(AppError::EmptyExtraction);
    }

    let job_description = if state.config.normalize_job_description {
        normalize(&job_description)
    } else {
        job_description
    };

    let prompt = compose(&resume_text, &job_description);
    info!(
        resume_chars = resume_text.len(),
        jd_chars = job_description.len(),
        backend = state.agent.name(),
        "Running ATS analysis"
    );

    let reply = state
        .agent
        .run(&prompt)
        .await
        .map_err(|e| AppError::Agent(e.to_string()))?;

    Ok(Json(AnalyzeResponse {
        analysis: reply.content,
    }))
}
