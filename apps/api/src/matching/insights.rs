//! Market insights — coarse demand signals computed over a batch of
//! postings. Pure function; the postings arrive from the search provider.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::SkillCatalog;
use crate::models::job::JobPosting;

/// Posting-count cutoffs for the demand label.
const HIGH_DEMAND_MIN: usize = 30;
const MEDIUM_DEMAND_MIN: usize = 15;

/// Entries reported in the top-skills / top-companies lists.
const TOP_N: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemandLevel {
    High,
    Medium,
    Low,
}

impl DemandLevel {
    fn from_posting_count(count: usize) -> Self {
        if count > HIGH_DEMAND_MIN {
            DemandLevel::High
        } else if count > MEDIUM_DEMAND_MIN {
            DemandLevel::Medium
        } else {
            DemandLevel::Low
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillFrequency {
    pub skill: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketInsights {
    pub role: String,
    pub total_postings: usize,
    pub demand_level: DemandLevel,
    pub top_skills: Vec<SkillFrequency>,
    pub top_companies: Vec<String>,
}

/// Summarizes demand for a role from its postings: top required skills by
/// frequency (alias-canonicalized), hiring companies, coarse demand level.
pub fn summarize_market(
    catalog: &SkillCatalog,
    role: &str,
    postings: &[JobPosting],
) -> MarketInsights {
    let mut frequency: HashMap<String, usize> = HashMap::new();
    for job in postings {
        for skill in &job.required_skills {
            let canonical = catalog.canonical_or_verbatim(skill);
            *frequency.entry(canonical).or_insert(0) += 1;
        }
    }

    let mut top_skills: Vec<SkillFrequency> = frequency
        .into_iter()
        .map(|(skill, count)| SkillFrequency { skill, count })
        .collect();
    top_skills.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.skill.cmp(&b.skill)));
    top_skills.truncate(TOP_N);

    let mut top_companies = Vec::new();
    for job in postings {
        if !top_companies
            .iter()
            .any(|c: &String| c.eq_ignore_ascii_case(&job.company))
        {
            top_companies.push(job.company.clone());
        }
        if top_companies.len() == TOP_N {
            break;
        }
    }

    MarketInsights {
        role: role.to_string(),
        total_postings: postings.len(),
        demand_level: DemandLevel::from_posting_count(postings.len()),
        top_skills,
        top_companies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn catalog() -> SkillCatalog {
        SkillCatalog::builtin().unwrap()
    }

    fn posting(company: &str, required: &[&str]) -> JobPosting {
        JobPosting {
            id: format!("{company}-1"),
            title: "Engineer".to_string(),
            company: company.to_string(),
            location: None,
            description: String::new(),
            required_skills: required.iter().map(|s| s.to_string()).collect(),
            salary_range: None,
            posted_at: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
            apply_url: None,
        }
    }

    #[test]
    fn test_skill_frequencies_canonicalize_aliases() {
        let postings = vec![
            posting("Acme", &["js", "Python"]),
            posting("Initech", &["JavaScript"]),
        ];
        let insights = summarize_market(&catalog(), "Engineer", &postings);
        let js = insights
            .top_skills
            .iter()
            .find(|s| s.skill == "JavaScript")
            .unwrap();
        assert_eq!(js.count, 2);
    }

    #[test]
    fn test_top_skills_sorted_by_count_then_name() {
        let postings = vec![
            posting("A", &["Python", "SQL"]),
            posting("B", &["Python"]),
        ];
        let insights = summarize_market(&catalog(), "Engineer", &postings);
        assert_eq!(insights.top_skills[0].skill, "Python");
        assert_eq!(insights.top_skills[0].count, 2);
        assert_eq!(insights.top_skills[1].skill, "SQL");
    }

    #[test]
    fn test_demand_levels() {
        let few: Vec<JobPosting> = (0..5).map(|_| posting("A", &[])).collect();
        assert_eq!(
            summarize_market(&catalog(), "r", &few).demand_level,
            DemandLevel::Low
        );
        let some: Vec<JobPosting> = (0..20).map(|_| posting("A", &[])).collect();
        assert_eq!(
            summarize_market(&catalog(), "r", &some).demand_level,
            DemandLevel::Medium
        );
        let many: Vec<JobPosting> = (0..40).map(|_| posting("A", &[])).collect();
        assert_eq!(
            summarize_market(&catalog(), "r", &many).demand_level,
            DemandLevel::High
        );
    }

    #[test]
    fn test_companies_deduplicated_case_insensitive() {
        let postings = vec![posting("Acme", &[]), posting("ACME", &[]), posting("B", &[])];
        let insights = summarize_market(&catalog(), "r", &postings);
        assert_eq!(insights.top_companies, vec!["Acme", "B"]);
    }

    #[test]
    fn test_empty_postings() {
        let insights = summarize_market(&catalog(), "r", &[]);
        assert_eq!(insights.total_postings, 0);
        assert_eq!(insights.demand_level, DemandLevel::Low);
        assert!(insights.top_skills.is_empty());
        assert!(insights.top_companies.is_empty());
    }
}
