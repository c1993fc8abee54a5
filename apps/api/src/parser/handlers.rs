use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::profile::ResumeProfile;
use crate::parser::extract::extract_text;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ParseResumeRequest {
    pub resume_text: String,
}

/// POST /api/v1/resume/parse
pub async fn handle_parse(
    State(state): State<AppState>,
    Json(req): Json<ParseResumeRequest>,
) -> Result<Json<ResumeProfile>, AppError> {
    let profile = state.parser.parse(&req.resume_text)?;
    info!(
        "Parsed resume: {} skills, {} experience entries, confidence {:.2}",
        profile.skills.len(),
        profile.experience.len(),
        profile.confidence_score
    );
    Ok(Json(profile))
}

/// POST /api/v1/resume/upload — multipart upload of a .txt/.pdf resume.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeProfile>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field
            .file_name()
            .ok_or_else(|| AppError::Validation("File field is missing a filename".to_string()))?
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        info!("Extracting resume upload '{}' ({} bytes)", filename, data.len());
        let text = extract_text(&filename, &data)?;
        let profile = state.parser.parse(&text)?;
        return Ok(Json(profile));
    }

    Err(AppError::Validation(
        "Multipart body must contain a 'file' field".to_string(),
    ))
}
