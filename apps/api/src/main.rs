mod catalog;
mod config;
mod errors;
mod gap;
mod jobs;
mod learning;
mod matching;
mod memory;
mod models;
mod parser;
mod routes;
mod state;
mod tools;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::SkillCatalog;
use crate::config::Config;
use crate::jobs::provider::{AdzunaClient, JobSearchProvider};
use crate::matching::scorer::WeightedJobScorer;
use crate::memory::SessionMemory;
use crate::parser::ResumeParser;
use crate::routes::build_router;
use crate::state::AppState;
use crate::tools::registry::ToolRegistry;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Waypoint API v{}", env!("CARGO_PKG_VERSION"));

    // Load the skill catalog (built-in tables unless CATALOG_PATH overrides)
    let catalog = Arc::new(match &config.catalog_path {
        Some(path) => SkillCatalog::from_path(path)?,
        None => SkillCatalog::builtin()?,
    });

    // Resume parser: compiled patterns + catalog, shared across requests
    let parser = Arc::new(ResumeParser::new(catalog.clone()));

    // Job scorer (WeightedJobScorer by default — trait seam for semantic backends)
    let scorer = Arc::new(WeightedJobScorer::new(
        catalog.clone(),
        config.match_weights,
    ));

    // Job search provider, only when credentials are configured
    let provider: Option<Arc<dyn JobSearchProvider>> =
        match (&config.adzuna_app_id, &config.adzuna_app_key) {
            (Some(id), Some(key)) => {
                info!("Job search provider initialized (adzuna/{})", config.adzuna_country);
                Some(Arc::new(AdzunaClient::new(
                    id.clone(),
                    key.clone(),
                    config.adzuna_country.clone(),
                    catalog.clone(),
                )))
            }
            _ => {
                info!("No job search credentials; /jobs/search disabled");
                None
            }
        };

    let tools = Arc::new(ToolRegistry::with_default_tools());
    info!("Tool registry initialized: {} tools", tools.list().len());

    let state = AppState {
        config: config.clone(),
        catalog,
        parser,
        scorer,
        provider,
        tools,
        memory: Arc::new(SessionMemory::new()),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
