use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::job::JobPosting;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobSearchRequest {
    pub query: String,
    pub location: Option<String>,
    #[serde(default)]
    pub limit: usize,
}

/// POST /api/v1/jobs/search — query the configured provider.
pub async fn handle_job_search(
    State(state): State<AppState>,
    Json(req): Json<JobSearchRequest>,
) -> Result<Json<Vec<JobPosting>>, AppError> {
    if req.query.trim().is_empty() {
        return Err(AppError::InvalidInput("query must not be empty".to_string()));
    }
    let provider = state.provider.as_ref().ok_or_else(|| {
        AppError::JobSearch(
            "No job search provider configured (set ADZUNA_APP_ID / ADZUNA_APP_KEY)".to_string(),
        )
    })?;

    let postings = provider
        .search(&req.query, req.location.as_deref(), req.limit)
        .await?;
    Ok(Json(postings))
}
