use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::gap::analyzer::{analyze_skill_gap, SkillGapResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SkillGapRequest {
    pub skills: Vec<String>,
    pub target_role: String,
}

/// POST /api/v1/skills/gap
pub async fn handle_skill_gap(
    State(state): State<AppState>,
    Json(req): Json<SkillGapRequest>,
) -> Result<Json<SkillGapResult>, AppError> {
    if req.target_role.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "target_role must not be empty".to_string(),
        ));
    }
    let result = analyze_skill_gap(
        &state.catalog,
        &req.skills,
        &req.target_role,
        &state.config.readiness_thresholds,
    );
    Ok(Json(result))
}
