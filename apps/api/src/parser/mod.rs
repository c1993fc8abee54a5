//! Resume parser — raw UTF-8 text in, best-effort `ResumeProfile` out.
//!
//! Deterministic and pure per call: section segmentation by heading
//! keywords, regex/dictionary entity pulls per section, heuristic date
//! parsing. Unparseable sections degrade to empty collections; only
//! structurally empty input fails.

pub mod contact;
pub mod dates;
pub mod entries;
pub mod extract;
pub mod handlers;
pub mod sections;
pub mod skills;

use std::sync::Arc;

use crate::catalog::SkillCatalog;
use crate::errors::AppError;
use crate::models::profile::ResumeProfile;
use contact::ContactPatterns;

/// Extraction shorter than this cannot plausibly be a resume.
pub const MIN_PARSE_CHARS: usize = 50;

/// Summary fallback bounds when no summary heading exists: the opening
/// paragraph is used only if it reads like prose of a sensible length.
const SUMMARY_FALLBACK_MIN: usize = 50;
const SUMMARY_FALLBACK_MAX: usize = 500;

/// Confidence signal weights. Confidence is the sum of satisfied signal
/// weights over the total — the proportion of expected fields populated.
const CONFIDENCE_WEIGHTS: &[(&str, f64)] = &[
    ("personal_info", 0.25),
    ("skills", 0.25),
    ("experience", 0.25),
    ("education", 0.15),
    ("summary", 0.10),
];

/// The parser: compiled patterns plus the shared skill catalog.
/// Built once at startup, safe to share across requests.
#[derive(Debug)]
pub struct ResumeParser {
    catalog: Arc<SkillCatalog>,
    patterns: ContactPatterns,
}

impl ResumeParser {
    pub fn new(catalog: Arc<SkillCatalog>) -> Self {
        Self {
            catalog,
            patterns: ContactPatterns::new(),
        }
    }

    /// Parses raw resume text into a structured profile.
    ///
    /// Fails only with `InsufficientContent` (input under `MIN_PARSE_CHARS`
    /// after trimming); everything else degrades field-by-field.
    pub fn parse(&self, text: &str) -> Result<ResumeProfile, AppError> {
        let text = text.trim();
        if text.chars().count() < MIN_PARSE_CHARS {
            return Err(AppError::InsufficientContent(format!(
                "Resume text must be at least {MIN_PARSE_CHARS} characters"
            )));
        }

        let seg = sections::segment(text);
        let contact = self.patterns.extract(text, &seg.preamble);
        let skills = skills::extract_skills(&self.catalog, text, &seg.skills);
        let experience = entries::parse_experience_section(&seg.experience);
        let education = entries::parse_education_section(&seg.education);
        let summary = extract_summary(&seg.summary, &seg.preamble);

        let mut profile = ResumeProfile {
            full_name: contact.full_name,
            email: contact.email,
            phone: contact.phone,
            location: contact.location,
            links: contact.links,
            skills,
            education,
            experience,
            summary,
            confidence_score: 0.0,
        };
        profile.confidence_score = confidence_score(&profile);
        Ok(profile)
    }
}

fn extract_summary(summary_section: &str, preamble: &str) -> Option<String> {
    let explicit = summary_section.trim();
    if !explicit.is_empty() {
        return Some(explicit.to_string());
    }

    // No summary heading: fall back to the first prose-sized preamble paragraph.
    preamble
        .split("\n\n")
        .map(str::trim)
        .find(|p| {
            let chars = p.chars().count();
            (SUMMARY_FALLBACK_MIN..=SUMMARY_FALLBACK_MAX).contains(&chars)
                && !p.contains('@')
                && p.lines().count() <= 4
        })
        .map(str::to_string)
}

/// Weighted proportion of expected profile fields that were populated.
fn confidence_score(profile: &ResumeProfile) -> f64 {
    let satisfied = |signal: &str| -> bool {
        match signal {
            "personal_info" => {
                profile.full_name.is_some() || profile.email.is_some() || profile.phone.is_some()
            }
            "skills" => !profile.skills.is_empty(),
            "experience" => !profile.experience.is_empty(),
            "education" => !profile.education.is_empty(),
            "summary" => profile.summary.is_some(),
            _ => false,
        }
    };

    let total: f64 = CONFIDENCE_WEIGHTS.iter().map(|(_, w)| w).sum();
    let earned: f64 = CONFIDENCE_WEIGHTS
        .iter()
        .filter(|(signal, _)| satisfied(signal))
        .map(|(_, w)| w)
        .sum();
    (earned / total).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_RESUME: &str = "\
Jane Doe
jane.doe@example.com | (415) 555-0199
San Francisco, CA

SUMMARY
Backend engineer with eight years building data platforms.

SKILLS
Python, SQL, Docker, k8s

EXPERIENCE
Senior Software Engineer - Acme Corp
Jan 2021 - Present
- Led migration of the billing stack to Kubernetes

EDUCATION
Bachelor of Computer Science
State University
2012-2016
";

    fn parser() -> ResumeParser {
        ResumeParser::new(Arc::new(SkillCatalog::builtin().unwrap()))
    }

    #[test]
    fn test_full_resume_parses_every_section() {
        let profile = parser().parse(FULL_RESUME).unwrap();
        assert_eq!(profile.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(profile.email.as_deref(), Some("jane.doe@example.com"));
        assert!(profile.skills.contains(&"Kubernetes".to_string()));
        assert_eq!(profile.experience.len(), 1);
        assert_eq!(profile.education.len(), 1);
        assert!(profile
            .summary
            .as_deref()
            .unwrap()
            .contains("data platforms"));
    }

    #[test]
    fn test_empty_text_is_insufficient_content() {
        let err = parser().parse("").unwrap_err();
        assert!(matches!(err, AppError::InsufficientContent(_)));
    }

    #[test]
    fn test_short_text_is_insufficient_content() {
        let err = parser().parse("too short to be a resume").unwrap_err();
        assert!(matches!(err, AppError::InsufficientContent(_)));
    }

    #[test]
    fn test_parse_is_idempotent() {
        let p = parser();
        let a = p.parse(FULL_RESUME).unwrap();
        let b = p.parse(FULL_RESUME).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_full_resume_has_full_confidence() {
        let profile = parser().parse(FULL_RESUME).unwrap();
        assert!((profile.confidence_score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sparse_resume_has_partial_confidence() {
        // Long enough to parse, but only skills are recognizable.
        let text = "Technologies: Python, SQL, and plenty of enthusiasm for writing software.";
        let profile = parser().parse(text).unwrap();
        assert!(profile.confidence_score > 0.0);
        assert!(profile.confidence_score < 1.0);
        assert!(profile.experience.is_empty());
        assert!(profile.education.is_empty());
    }

    #[test]
    fn test_missing_sections_never_fail() {
        let text = "Jordan Smith\njordan@example.com\nA person of few words but many talents.";
        let profile = parser().parse(text).unwrap();
        assert_eq!(profile.full_name.as_deref(), Some("Jordan Smith"));
        assert!(profile.experience.is_empty());
        assert!(profile.education.is_empty());
    }

    #[test]
    fn test_most_recent_title() {
        let profile = parser().parse(FULL_RESUME).unwrap();
        assert_eq!(
            profile.most_recent_title(),
            Some("Senior Software Engineer")
        );
    }
}
