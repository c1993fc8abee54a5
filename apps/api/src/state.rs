use std::sync::Arc;

use crate::catalog::SkillCatalog;
use crate::config::Config;
use crate::jobs::provider::JobSearchProvider;
use crate::matching::scorer::JobScorer;
use crate::memory::SessionMemory;
use crate::parser::ResumeParser;
use crate::tools::registry::{ToolContext, ToolRegistry};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Versioned skill/role reference data, loaded once at startup.
    pub catalog: Arc<SkillCatalog>,
    pub parser: Arc<ResumeParser>,
    /// Pluggable job scorer. Default: WeightedJobScorer.
    pub scorer: Arc<dyn JobScorer>,
    /// `None` when no provider credentials are configured — the search
    /// endpoint degrades to a typed error, everything else works.
    pub provider: Option<Arc<dyn JobSearchProvider>>,
    pub tools: Arc<ToolRegistry>,
    pub memory: Arc<SessionMemory>,
}

impl AppState {
    /// Dependencies handed to tool invocations.
    pub fn tool_context(&self) -> ToolContext {
        ToolContext {
            parser: self.parser.clone(),
            catalog: self.catalog.clone(),
            weights: self.config.match_weights,
            thresholds: self.config.readiness_thresholds,
        }
    }
}
