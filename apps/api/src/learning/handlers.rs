use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::learning::planner::{generate_learning_path, Stage};

#[derive(Debug, Deserialize)]
pub struct LearningPathRequest {
    pub missing_skills: Vec<String>,
    pub horizon_months: u32,
}

/// POST /api/v1/learning/path
pub async fn handle_learning_path(
    Json(req): Json<LearningPathRequest>,
) -> Result<Json<Vec<Stage>>, AppError> {
    let stages = generate_learning_path(&req.missing_skills, req.horizon_months)?;
    Ok(Json(stages))
}
