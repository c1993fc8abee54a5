use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::matching::insights::{summarize_market, MarketInsights};
use crate::models::job::{JobPosting, MatchScore};
use crate::models::profile::ResumeProfile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchJobsRequest {
    pub profile: ResumeProfile,
    pub postings: Vec<JobPosting>,
    /// Defaults to 0 — every posting is returned, ranked.
    #[serde(default)]
    pub min_score: f64,
}

/// POST /api/v1/jobs/match — rank supplied postings against a profile.
pub async fn handle_match_jobs(
    State(state): State<AppState>,
    Json(req): Json<MatchJobsRequest>,
) -> Result<Json<Vec<MatchScore>>, AppError> {
    let ranked = state
        .scorer
        .rank(&req.profile, &req.postings, req.min_score)
        .await?;
    info!(
        "Ranked {} postings, {} above threshold {}",
        req.postings.len(),
        ranked.len(),
        req.min_score
    );
    Ok(Json(ranked))
}

#[derive(Debug, Deserialize)]
pub struct MarketInsightsRequest {
    pub role: String,
    pub postings: Vec<JobPosting>,
}

/// POST /api/v1/insights/market — demand summary over supplied postings.
pub async fn handle_market_insights(
    State(state): State<AppState>,
    Json(req): Json<MarketInsightsRequest>,
) -> Result<Json<MarketInsights>, AppError> {
    Ok(Json(summarize_market(
        &state.catalog,
        &req.role,
        &req.postings,
    )))
}
