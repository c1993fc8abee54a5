#![allow(dead_code)]

//! Job Matching — pluggable, trait-based scorer that ranks postings
//! against one profile.
//!
//! Default: `WeightedJobScorer` (pure-Rust, deterministic, fully testable).
//! The trait seam exists so a semantic backend can be swapped in without
//! touching the endpoint, handler, or caller code.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::catalog::SkillCatalog;
use crate::errors::AppError;
use crate::models::job::{JobPosting, MatchScore};
use crate::models::profile::ResumeProfile;

/// Component weights for the match score. Documented defaults:
/// 0.60 skill overlap, 0.25 title similarity, 0.15 location.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchWeights {
    pub skill_overlap: f64,
    pub title_similarity: f64,
    pub location_match: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skill_overlap: 0.60,
            title_similarity: 0.25,
            location_match: 0.15,
        }
    }
}

impl MatchWeights {
    pub fn sum(&self) -> f64 {
        self.skill_overlap + self.title_similarity + self.location_match
    }
}

/// The job scorer trait, carried in `AppState` as `Arc<dyn JobScorer>`.
#[async_trait]
pub trait JobScorer: Send + Sync {
    async fn rank(
        &self,
        profile: &ResumeProfile,
        postings: &[JobPosting],
        min_score: f64,
    ) -> Result<Vec<MatchScore>, AppError>;
}

/// Default weighted keyword scorer. Pure function over its inputs — any
/// network fetch of postings happens upstream.
pub struct WeightedJobScorer {
    catalog: Arc<SkillCatalog>,
    weights: MatchWeights,
}

impl WeightedJobScorer {
    pub fn new(catalog: Arc<SkillCatalog>, weights: MatchWeights) -> Self {
        Self { catalog, weights }
    }
}

#[async_trait]
impl JobScorer for WeightedJobScorer {
    async fn rank(
        &self,
        profile: &ResumeProfile,
        postings: &[JobPosting],
        min_score: f64,
    ) -> Result<Vec<MatchScore>, AppError> {
        rank_postings(&self.catalog, &self.weights, profile, postings, min_score)
    }
}

/// Ranks a batch of postings: score each, filter below `min_score`, sort
/// descending by score with recency then job-id tie-breaks.
pub fn rank_postings(
    catalog: &SkillCatalog,
    weights: &MatchWeights,
    profile: &ResumeProfile,
    postings: &[JobPosting],
    min_score: f64,
) -> Result<Vec<MatchScore>, AppError> {
    if min_score < 0.0 {
        return Err(AppError::InvalidInput(format!(
            "min_score must be non-negative, got {min_score}"
        )));
    }

    let mut scored: Vec<MatchScore> = postings
        .iter()
        .map(|job| score_posting(catalog, weights, profile, job))
        .filter(|m| m.score >= min_score)
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.job.posted_at.cmp(&a.job.posted_at))
            .then_with(|| a.job.id.cmp(&b.job.id))
    });

    Ok(scored)
}

/// Scores one (profile, posting) pair.
pub fn score_posting(
    catalog: &SkillCatalog,
    weights: &MatchWeights,
    profile: &ResumeProfile,
    job: &JobPosting,
) -> MatchScore {
    let (skill_score, matched_skills) =
        skill_overlap(catalog, &profile.skills, &job.required_skills);
    let title_score = title_similarity(profile.most_recent_title(), &job.title);
    let location_hit = location_matches(profile.location.as_deref(), job.location.as_deref());

    let score = (weights.skill_overlap * skill_score
        + weights.title_similarity * title_score
        + weights.location_match * f64::from(u8::from(location_hit)))
    .clamp(0.0, 1.0);

    let rationale = build_rationale(&matched_skills, title_score, location_hit);

    MatchScore {
        job: job.clone(),
        score,
        matched_skills,
        rationale,
    }
}

/// Matched/required ratio after alias canonicalization. A posting with no
/// stated requirements is trivially satisfied (1.0), mirroring gap analysis.
pub fn skill_overlap(
    catalog: &SkillCatalog,
    candidate: &[String],
    required: &[String],
) -> (f64, Vec<String>) {
    if required.is_empty() {
        return (1.0, Vec::new());
    }

    let candidate_keys: HashSet<String> = candidate
        .iter()
        .map(|s| catalog.canonical_or_verbatim(s).to_lowercase())
        .collect();

    let matched: Vec<String> = required
        .iter()
        .filter(|req| candidate_keys.contains(&catalog.canonical_or_verbatim(req).to_lowercase()))
        .cloned()
        .collect();

    (matched.len() as f64 / required.len() as f64, matched)
}

const TITLE_STOPWORDS: &[&str] = &["and", "the", "for", "with", "of", "in", "at", "to", "a", "an"];

fn tokenize(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= 2 && !TITLE_STOPWORDS.contains(t))
        .map(str::to_string)
        .collect()
}

/// Token overlap between the candidate's most recent title and the posting
/// title, as a fraction of the posting's tokens.
pub fn title_similarity(candidate_title: Option<&str>, posting_title: &str) -> f64 {
    let candidate_title = match candidate_title {
        Some(t) => t,
        None => return 0.0,
    };
    let posting_tokens = tokenize(posting_title);
    if posting_tokens.is_empty() {
        return 0.0;
    }
    let candidate_tokens = tokenize(candidate_title);
    let shared = posting_tokens.intersection(&candidate_tokens).count();
    shared as f64 / posting_tokens.len() as f64
}

/// Exact or region-token location match.
pub fn location_matches(candidate: Option<&str>, posting: Option<&str>) -> bool {
    let (candidate, posting) = match (candidate, posting) {
        (Some(c), Some(p)) => (c, p),
        _ => return false,
    };
    if candidate.eq_ignore_ascii_case(posting) {
        return true;
    }
    // Region match: any shared substantial token ("San Francisco, CA" vs
    // "San Francisco Bay Area").
    let candidate_tokens = tokenize(candidate);
    tokenize(posting)
        .iter()
        .any(|t| t.chars().count() >= 3 && candidate_tokens.contains(t))
}

fn build_rationale(matched: &[String], title_score: f64, location_hit: bool) -> String {
    let mut parts = Vec::new();
    if matched.is_empty() {
        parts.push("Limited skill overlap".to_string());
    } else {
        let shown: Vec<&str> = matched.iter().take(3).map(String::as_str).collect();
        parts.push(format!("Matched skills: {}", shown.join(", ")));
    }
    if title_score >= 0.5 {
        parts.push("title aligns with recent experience".to_string());
    }
    if location_hit {
        parts.push("location matches".to_string());
    }
    parts.join("; ")
}
