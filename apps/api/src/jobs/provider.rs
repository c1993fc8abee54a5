#![allow(dead_code)]

//! Job search provider — the single point of entry for external job-board
//! calls.
//!
//! The core scorer never talks to this module; postings always arrive at
//! the matcher as already-resolved data. Providers are rate-limited and may
//! return partial pages — an empty result set is a valid answer.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{info, warn};

use crate::catalog::SkillCatalog;
use crate::errors::AppError;
use crate::models::job::{JobPosting, SalaryRange};

const ADZUNA_API_URL: &str = "https://api.adzuna.com/v1/api/jobs";
const MAX_RETRIES: u32 = 3;
const DEFAULT_LIMIT: usize = 10;
pub const MAX_LIMIT: usize = 50;

/// A source of job postings. Behind a trait so handlers and tools are
/// indifferent to the board being queried.
#[async_trait]
pub trait JobSearchProvider: Send + Sync {
    async fn search(
        &self,
        query: &str,
        location: Option<&str>,
        limit: usize,
    ) -> Result<Vec<JobPosting>, AppError>;
}

// Adzuna wire format — only the fields we map.
#[derive(Debug, Deserialize)]
struct AdzunaResponse {
    results: Vec<AdzunaJob>,
}

#[derive(Debug, Deserialize)]
struct AdzunaJob {
    id: String,
    title: String,
    company: Option<AdzunaName>,
    location: Option<AdzunaName>,
    description: Option<String>,
    redirect_url: Option<String>,
    salary_min: Option<f64>,
    salary_max: Option<f64>,
    created: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct AdzunaName {
    display_name: Option<String>,
}

/// Adzuna-backed provider. Requires an app id/key pair; retries bounded on
/// 429 and 5xx with exponential backoff.
pub struct AdzunaClient {
    client: reqwest::Client,
    app_id: String,
    app_key: String,
    country: String,
    catalog: Arc<SkillCatalog>,
}

impl AdzunaClient {
    pub fn new(
        app_id: String,
        app_key: String,
        country: String,
        catalog: Arc<SkillCatalog>,
    ) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            app_id,
            app_key,
            country,
            catalog,
        }
    }

    fn map_posting(&self, raw: AdzunaJob) -> JobPosting {
        let description = raw.description.unwrap_or_default();
        // Adzuna has no structured requirements; mine them from the
        // description with the same vocabulary the parser uses.
        let required_skills =
            crate::parser::skills::extract_skills(&self.catalog, &description, "");

        let salary_range = match (raw.salary_min, raw.salary_max) {
            (Some(min), Some(max)) => Some(SalaryRange { min, max }),
            _ => None,
        };

        JobPosting {
            id: raw.id,
            title: raw.title,
            company: raw
                .company
                .and_then(|c| c.display_name)
                .unwrap_or_else(|| "Unknown".to_string()),
            location: raw.location.and_then(|l| l.display_name),
            description,
            required_skills,
            salary_range,
            posted_at: raw.created.unwrap_or_else(Utc::now),
            apply_url: raw.redirect_url,
        }
    }
}

#[async_trait]
impl JobSearchProvider for AdzunaClient {
    async fn search(
        &self,
        query: &str,
        location: Option<&str>,
        limit: usize,
    ) -> Result<Vec<JobPosting>, AppError> {
        let limit = if limit == 0 { DEFAULT_LIMIT } else { limit }.min(MAX_LIMIT);
        let url = format!("{ADZUNA_API_URL}/{}/search/1", self.country);

        let mut params = vec![
            ("app_id", self.app_id.clone()),
            ("app_key", self.app_key.clone()),
            ("what", query.to_string()),
            ("results_per_page", limit.to_string()),
            ("content-type", "application/json".to_string()),
        ];
        if let Some(loc) = location {
            params.push(("where", loc.to_string()));
        }

        let mut last_error = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s.
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "Job search attempt {attempt} failed, retrying after {}ms...",
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self.client.get(&url).query(&params).send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(format!("HTTP error: {e}"));
                    continue;
                }
            };

            let status = response.status();
            if status.as_u16() == 429 || status.is_server_error() {
                last_error = Some(format!("Provider returned {status}"));
                continue;
            }
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(AppError::JobSearch(format!(
                    "Provider returned {status}: {body}"
                )));
            }

            let parsed: AdzunaResponse = response
                .json()
                .await
                .map_err(|e| AppError::JobSearch(format!("Malformed provider response: {e}")))?;

            let postings: Vec<JobPosting> = parsed
                .results
                .into_iter()
                .map(|raw| self.map_posting(raw))
                .collect();
            info!("Job search '{query}' returned {} postings", postings.len());
            return Ok(postings);
        }

        Err(AppError::JobSearch(last_error.unwrap_or_else(|| {
            format!("Provider unavailable after {MAX_RETRIES} attempts")
        })))
    }
}
