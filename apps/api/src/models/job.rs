//! Job posting and match-score models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One job posting as returned by a search provider.
///
/// Read-only input to the matcher — postings are ephemeral and never owned
/// or mutated by this service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    /// Provider-scoped opaque identifier.
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub description: String,
    pub required_skills: Vec<String>,
    pub salary_range: Option<SalaryRange>,
    pub posted_at: DateTime<Utc>,
    pub apply_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: f64,
    pub max: f64,
}

/// Scored compatibility between one profile and one posting, in [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchScore {
    pub job: JobPosting,
    pub score: f64,
    pub matched_skills: Vec<String>,
    pub rationale: String,
}
