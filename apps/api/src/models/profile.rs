//! Structured profile produced by the resume parser.
//!
//! A `ResumeProfile` is built once per document and treated as immutable by
//! everything downstream (gap analysis, job matching).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Best-effort structured view of one resume.
///
/// Optional fields stay `None` when the document did not yield them —
/// missing data never fails a parse on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    /// Profile/portfolio URLs (LinkedIn, GitHub, personal site), first-seen order.
    pub links: Vec<String>,
    /// Deduplicated case-insensitively, first-seen casing preserved.
    pub skills: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub summary: Option<String>,
    /// Proportion of expected fields successfully populated, in [0, 1].
    pub confidence_score: f64,
}

impl ResumeProfile {
    /// The candidate's most recent role title, used for title-similarity scoring.
    /// Entries are kept in document order, which resumes list newest-first.
    pub fn most_recent_title(&self) -> Option<&str> {
        self.experience.first().map(|e| e.title.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub institution: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub gpa: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<NaiveDate>,
    /// `None` means a current position.
    pub end_date: Option<NaiveDate>,
    pub bullet_points: Vec<String>,
}
