//! Skill-gap analysis — candidate skills vs a target role's requirements.
//!
//! Never fails: an unresolvable role degrades to the permissive fallback
//! (empty requirements, trivially satisfied) with `role_resolved = false`
//! so callers can surface the ambiguity.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

use crate::catalog::SkillCatalog;

/// Readiness cutoffs on match percentage. The single home for these
/// thresholds — nothing else hardcodes them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReadinessThresholds {
    pub ready: f64,
    pub needs_development: f64,
}

impl Default for ReadinessThresholds {
    fn default() -> Self {
        Self {
            ready: 80.0,
            needs_development: 40.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Readiness {
    Ready,
    NeedsDevelopment,
    NotReady,
}

impl Readiness {
    pub fn classify(match_percentage: f64, thresholds: &ReadinessThresholds) -> Self {
        if match_percentage >= thresholds.ready {
            Readiness::Ready
        } else if match_percentage >= thresholds.needs_development {
            Readiness::NeedsDevelopment
        } else {
            Readiness::NotReady
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGapResult {
    pub target_role: String,
    /// False when the role table had no plausible match and the permissive
    /// fallback below applies.
    pub role_resolved: bool,
    pub required_skills: Vec<String>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    /// |matched| / |required| × 100; an empty requirement set is trivially
    /// satisfied (100).
    pub match_percentage: f64,
    pub readiness: Readiness,
}

/// Compares candidate skills against the target role's requirements.
///
/// Candidate skills are canonicalized through the alias table before the
/// case-insensitive intersection, so "JS" covers a "JavaScript" requirement.
pub fn analyze_skill_gap(
    catalog: &SkillCatalog,
    skills: &[String],
    target_role: &str,
    thresholds: &ReadinessThresholds,
) -> SkillGapResult {
    let (required, role_resolved) = match catalog.resolve_role(target_role) {
        Some(role) => (role.required_skills.clone(), true),
        None => {
            warn!("Target role '{target_role}' not in role table; using permissive fallback");
            (Vec::new(), false)
        }
    };

    let candidate: HashSet<String> = skills
        .iter()
        .map(|s| catalog.canonical_or_verbatim(s).to_lowercase())
        .collect();

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for req in &required {
        let key = catalog.canonical_or_verbatim(req).to_lowercase();
        if candidate.contains(&key) {
            matched.push(req.clone());
        } else {
            missing.push(req.clone());
        }
    }

    let match_percentage = if required.is_empty() {
        100.0
    } else {
        (matched.len() as f64 / required.len() as f64) * 100.0
    };

    SkillGapResult {
        target_role: target_role.to_string(),
        role_resolved,
        required_skills: required,
        matched_skills: matched,
        missing_skills: missing,
        match_percentage,
        readiness: Readiness::classify(match_percentage, thresholds),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_CATALOG: &str = r#"{
        "version": 1,
        "skills": ["Python", "Machine Learning", "SQL", "Statistics", "JavaScript", "React"],
        "aliases": {"js": "JavaScript", "ml": "Machine Learning"},
        "roles": {
            "Data Scientist": ["Python", "Machine Learning", "SQL", "Statistics"],
            "Frontend Developer": ["JavaScript", "React"]
        }
    }"#;

    fn catalog() -> SkillCatalog {
        SkillCatalog::from_json_str(TEST_CATALOG).unwrap()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_data_scientist_scenario_half_match() {
        let result = analyze_skill_gap(
            &catalog(),
            &strings(&["Python", "SQL"]),
            "Data Scientist",
            &ReadinessThresholds::default(),
        );
        assert!(result.role_resolved);
        assert_eq!(result.matched_skills, strings(&["Python", "SQL"]));
        assert_eq!(
            result.missing_skills,
            strings(&["Machine Learning", "Statistics"])
        );
        assert!((result.match_percentage - 50.0).abs() < f64::EPSILON);
        assert_eq!(result.readiness, Readiness::NeedsDevelopment);
    }

    #[test]
    fn test_superset_of_requirements_is_ready() {
        let result = analyze_skill_gap(
            &catalog(),
            &strings(&["Python", "Machine Learning", "SQL", "Statistics", "Rust"]),
            "Data Scientist",
            &ReadinessThresholds::default(),
        );
        assert!((result.match_percentage - 100.0).abs() < f64::EPSILON);
        assert_eq!(result.readiness, Readiness::Ready);
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_unknown_role_permissive_fallback() {
        let result = analyze_skill_gap(
            &catalog(),
            &strings(&["Python"]),
            "UnknownRoleXYZ",
            &ReadinessThresholds::default(),
        );
        assert!(!result.role_resolved);
        assert!(result.required_skills.is_empty());
        assert!((result.match_percentage - 100.0).abs() < f64::EPSILON);
        assert_eq!(result.readiness, Readiness::Ready);
    }

    #[test]
    fn test_aliases_normalized_before_comparison() {
        let result = analyze_skill_gap(
            &catalog(),
            &strings(&["js"]),
            "Frontend Developer",
            &ReadinessThresholds::default(),
        );
        assert_eq!(result.matched_skills, strings(&["JavaScript"]));
        assert_eq!(result.missing_skills, strings(&["React"]));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let result = analyze_skill_gap(
            &catalog(),
            &strings(&["PYTHON", "sql"]),
            "data scientist",
            &ReadinessThresholds::default(),
        );
        assert_eq!(result.matched_skills.len(), 2);
    }

    #[test]
    fn test_no_skills_not_ready() {
        let result = analyze_skill_gap(
            &catalog(),
            &[],
            "Data Scientist",
            &ReadinessThresholds::default(),
        );
        assert!((result.match_percentage - 0.0).abs() < f64::EPSILON);
        assert_eq!(result.readiness, Readiness::NotReady);
    }

    #[test]
    fn test_readiness_boundaries() {
        let t = ReadinessThresholds::default();
        assert_eq!(Readiness::classify(80.0, &t), Readiness::Ready);
        assert_eq!(Readiness::classify(79.9, &t), Readiness::NeedsDevelopment);
        assert_eq!(Readiness::classify(40.0, &t), Readiness::NeedsDevelopment);
        assert_eq!(Readiness::classify(39.9, &t), Readiness::NotReady);
    }
}
