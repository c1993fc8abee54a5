pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::gap::handlers as gap_handlers;
use crate::jobs::handlers as job_handlers;
use crate::learning::handlers as learning_handlers;
use crate::matching::handlers as match_handlers;
use crate::parser::handlers as resume_handlers;
use crate::state::AppState;
use crate::tools::handlers as tool_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume parsing
        .route("/api/v1/resume/parse", post(resume_handlers::handle_parse))
        .route(
            "/api/v1/resume/upload",
            post(resume_handlers::handle_upload),
        )
        // Skill gap analysis
        .route("/api/v1/skills/gap", post(gap_handlers::handle_skill_gap))
        // Job matching
        .route(
            "/api/v1/jobs/match",
            post(match_handlers::handle_match_jobs),
        )
        .route("/api/v1/jobs/search", post(job_handlers::handle_job_search))
        .route(
            "/api/v1/insights/market",
            post(match_handlers::handle_market_insights),
        )
        // Learning paths
        .route(
            "/api/v1/learning/path",
            post(learning_handlers::handle_learning_path),
        )
        // Tool dispatch + session memory
        .route("/api/v1/tools", get(tool_handlers::handle_list_tools))
        .route(
            "/api/v1/tools/:name",
            post(tool_handlers::handle_invoke_tool),
        )
        .route(
            "/api/v1/sessions/:id/events",
            get(tool_handlers::handle_session_events),
        )
        .with_state(state)
}
