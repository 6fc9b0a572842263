//! Axum route handler for petition generation.

use axum::{extract::State, Json};
use bytes::Bytes;
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::petition::builder::build_prompt;
use crate::petition::form::validate_submission;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GeneratePetitionResponse {
    pub text: String,
}

/// POST /api/generate-petition
///
/// Validates the intake form, builds the prompt and makes exactly one provider call.
/// The body is read as raw bytes so that an empty or malformed body still gets the
/// `{ error }` envelope instead of the extractor's default rejection.
pub async fn handle_generate_petition(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<GeneratePetitionResponse>, AppError> {
    let request_id = Uuid::new_v4();

    let submission = validate_submission(&body)?;
    let prompt = build_prompt(&submission);

    info!(
        "[{request_id}] Generating petition: problem_type={:?}, {} prompt chars",
        submission.problem_type.as_deref().unwrap_or_default(),
        prompt.chars().count()
    );

    let text = state.generator.generate(&prompt).await.map_err(|e| {
        error!("[{request_id}] Petition generation failed: {e}");
        AppError::from(e)
    })?;

    info!(
        "[{request_id}] Petition generated: {} chars",
        text.chars().count()
    );

    Ok(Json(GeneratePetitionResponse { text }))
}
