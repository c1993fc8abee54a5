use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::gap::analyzer::ReadinessThresholds;
use crate::matching::scorer::MatchWeights;

/// Application configuration loaded from environment variables.
/// Only the job-search provider credentials are optional.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Optional override for the built-in skill catalog.
    pub catalog_path: Option<PathBuf>,
    pub adzuna_app_id: Option<String>,
    pub adzuna_app_key: Option<String>,
    pub adzuna_country: String,
    pub readiness_thresholds: ReadinessThresholds,
    pub match_weights: MatchWeights,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            catalog_path: std::env::var("CATALOG_PATH").ok().map(PathBuf::from),
            adzuna_app_id: std::env::var("ADZUNA_APP_ID").ok(),
            adzuna_app_key: std::env::var("ADZUNA_APP_KEY").ok(),
            adzuna_country: std::env::var("ADZUNA_COUNTRY").unwrap_or_else(|_| "us".to_string()),
            readiness_thresholds: ReadinessThresholds::default(),
            match_weights: MatchWeights::default(),
        })
    }
}
