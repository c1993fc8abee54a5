use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::memory::MemoryEvent;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ToolInvocation {
    /// When present, the call is recorded in session memory.
    pub session_id: Option<Uuid>,
    #[serde(default)]
    pub args: Value,
}

#[derive(Debug, Serialize)]
pub struct ToolResponse {
    pub tool: String,
    pub session_id: Option<Uuid>,
    pub result: Value,
}

/// POST /api/v1/tools/:name — dispatch a registered tool by name.
pub async fn handle_invoke_tool(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(req): Json<ToolInvocation>,
) -> Result<Json<ToolResponse>, AppError> {
    let outcome = state.tools.invoke(&state.tool_context(), &name, req.args);

    if let Some(session) = req.session_id {
        state.memory.append(
            session,
            "tool_call",
            json!({"tool": name.as_str(), "ok": outcome.is_ok()}),
        );
    }

    let result = outcome?;
    info!("Tool '{name}' invoked");
    Ok(Json(ToolResponse {
        tool: name,
        session_id: req.session_id,
        result,
    }))
}

#[derive(Debug, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
}

/// GET /api/v1/tools — list registered tools.
pub async fn handle_list_tools(State(state): State<AppState>) -> Json<Vec<ToolDescriptor>> {
    Json(
        state
            .tools
            .list()
            .into_iter()
            .map(|(name, description)| ToolDescriptor { name, description })
            .collect(),
    )
}

/// GET /api/v1/sessions/:id/events — full event log for a session.
pub async fn handle_session_events(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Json<Vec<MemoryEvent>> {
    Json(state.memory.events(id))
}
