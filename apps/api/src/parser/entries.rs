//! Experience and education entry parsing.
//!
//! Sections are split into blank-line-separated blocks, then each block is
//! mined with the same heuristics the rest of the parser uses: title/company
//! separators, date ranges, city-state lines, bulleted descriptions.

use regex::Regex;

use crate::models::profile::{EducationEntry, ExperienceEntry};
use crate::parser::dates::find_date_range;

/// Splits a section into blocks separated by blank lines.
fn split_blocks(section: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in section.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line.trim());
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

fn city_state_regex() -> Regex {
    Regex::new(r"^[A-Z][a-zA-Z]+(?: [A-Z][a-zA-Z]+)*,\s*(?:[A-Z]{2}|[A-Z][a-z]+)$")
        .expect("static city-state pattern")
}

fn date_only_regex() -> Regex {
    Regex::new(r"(?i)^\s*(?:[A-Za-z]{3,9}\.?[ \t]+\d{4}|\d{1,2}/\d{4}|\d{4})[ \t]*(?:-|–|—|to)[ \t]*(?:[A-Za-z]{3,9}\.?[ \t]+\d{4}|\d{1,2}/\d{4}|\d{4}|present|current|now)\s*$")
        .expect("static date-line pattern")
}

/// Splits "Software Engineer - Acme Corp" / "Engineer at Acme" style lines.
fn split_title_company(line: &str) -> (String, Option<String>) {
    for sep in [" - ", " – ", " — ", " | ", " at ", " @ "] {
        if let Some((title, company)) = line.split_once(sep) {
            let title = title.trim();
            let company = company.trim();
            if !title.is_empty() && !company.is_empty() {
                return (title.to_string(), Some(company.to_string()));
            }
        }
    }
    (line.trim().to_string(), None)
}

/// Parses the experience section into entries, document order preserved.
/// Blocks that look like stray headers or noise are dropped, never errors.
pub fn parse_experience_section(section: &str) -> Vec<ExperienceEntry> {
    let city_state = city_state_regex();
    let date_only = date_only_regex();
    let mut entries = Vec::new();

    for block in split_blocks(section) {
        let first = block[0];
        // A block opening with a bare date range is a continuation, not a role.
        if date_only.is_match(first) || first.chars().count() < 3 {
            continue;
        }

        let (title, company) = split_title_company(first);
        let range = find_date_range(&block.join("\n"));

        let mut location = None;
        let mut bullet_points = Vec::new();
        for line in &block[1..] {
            if date_only.is_match(line) {
                continue;
            }
            if location.is_none() && city_state.is_match(line) {
                location = Some((*line).to_string());
                continue;
            }
            let text = line
                .trim_start_matches(['-', '*', '•', '–'])
                .trim()
                .to_string();
            if !text.is_empty() {
                bullet_points.push(text);
            }
        }

        entries.push(ExperienceEntry {
            title,
            company,
            location,
            start_date: range.and_then(|r| r.start),
            end_date: range.and_then(|r| r.end),
            bullet_points,
        });
    }

    entries
}

fn degree_regex() -> Regex {
    Regex::new(
        r"(?i)\b(Bachelor(?:s|'s)?|Master(?:s|'s)?|Ph\.?D\.?|Doctorate|Associate|Diploma|Certificate|B\.?Sc?\.?|M\.?Sc?\.?|B\.?A\.?|M\.?A\.?|MBA)\b(?:\s+(?:of|in)\s+([A-Za-z][A-Za-z &/]{2,40}))?",
    )
    .expect("static degree pattern")
}

fn institution_regex() -> Regex {
    Regex::new(
        r"(?:University of [A-Z][A-Za-z ]+|[A-Z][A-Za-z&.' ]+(?:University|College|Institute of Technology|Institute|School))",
    )
    .expect("static institution pattern")
}

fn gpa_regex() -> Regex {
    Regex::new(r"(?i)GPA[:\s]+([0-4](?:\.\d{1,2})?)").expect("static gpa pattern")
}

/// Parses the education section into entries.
pub fn parse_education_section(section: &str) -> Vec<EducationEntry> {
    let degree_re = degree_regex();
    let institution_re = institution_regex();
    let gpa_re = gpa_regex();
    let city_state = city_state_regex();
    let mut entries = Vec::new();

    for block in split_blocks(section) {
        let text = block.join("\n");
        let degree_caps = degree_re.captures(&text);
        let institution = institution_re
            .find(&text)
            .map(|m| m.as_str().trim().to_string());

        // Needs at least a degree keyword or an institution to count.
        if degree_caps.is_none() && institution.is_none() {
            continue;
        }

        let (degree, field_of_study) = match &degree_caps {
            Some(caps) => (
                Some(caps[1].trim().to_string()),
                caps.get(2).map(|m| m.as_str().trim().to_string()),
            ),
            None => (None, None),
        };

        let range = find_date_range(&text);
        let location = block
            .iter()
            .find(|l| city_state.is_match(l))
            .map(|l| (*l).to_string());
        let gpa = gpa_re
            .captures(&text)
            .and_then(|c| c[1].parse::<f64>().ok());

        entries.push(EducationEntry {
            degree,
            field_of_study,
            institution,
            location,
            start_date: range.and_then(|r| r.start),
            end_date: range.and_then(|r| r.end),
            gpa,
        });
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const EXPERIENCE: &str = "\
Senior Software Engineer - Acme Corp
Denver, CO
Jan 2021 - Present
- Led migration of the billing stack to Kubernetes
- Cut p99 latency by 40%

Backend Developer at Initech
Mar 2018 - Dec 2020
• Built REST APIs in Python
";

    #[test]
    fn test_experience_entries_split_and_parsed() {
        let entries = parse_experience_section(EXPERIENCE);
        assert_eq!(entries.len(), 2);

        let first = &entries[0];
        assert_eq!(first.title, "Senior Software Engineer");
        assert_eq!(first.company.as_deref(), Some("Acme Corp"));
        assert_eq!(first.location.as_deref(), Some("Denver, CO"));
        assert_eq!(first.start_date, Some(ymd(2021, 1, 1)));
        assert_eq!(first.end_date, None); // current position
        assert_eq!(first.bullet_points.len(), 2);

        let second = &entries[1];
        assert_eq!(second.title, "Backend Developer");
        assert_eq!(second.company.as_deref(), Some("Initech"));
        assert_eq!(second.end_date, Some(ymd(2020, 12, 1)));
        assert_eq!(second.bullet_points, vec!["Built REST APIs in Python"]);
    }

    #[test]
    fn test_title_without_company() {
        let entries = parse_experience_section("Freelance Consultant\n2019 - 2021\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Freelance Consultant");
        assert_eq!(entries[0].company, None);
    }

    #[test]
    fn test_date_only_block_is_skipped() {
        let entries = parse_experience_section("Jan 2020 - Dec 2020\n");
        assert!(entries.is_empty());
    }

    #[test]
    fn test_empty_section_yields_no_entries() {
        assert!(parse_experience_section("").is_empty());
        assert!(parse_education_section("").is_empty());
    }

    const EDUCATION: &str = "\
Bachelor of Computer Science
State University
Austin, TX
2016-2020
GPA: 3.8

Master of Science
Tech Institute of Technology
2020-2022
";

    #[test]
    fn test_education_entries_parsed() {
        let entries = parse_education_section(EDUCATION);
        assert_eq!(entries.len(), 2);

        let first = &entries[0];
        assert_eq!(first.degree.as_deref(), Some("Bachelor"));
        assert_eq!(first.field_of_study.as_deref(), Some("Computer Science"));
        assert_eq!(first.institution.as_deref(), Some("State University"));
        assert_eq!(first.location.as_deref(), Some("Austin, TX"));
        assert_eq!(first.start_date, Some(ymd(2016, 1, 1)));
        assert_eq!(first.end_date, Some(ymd(2020, 12, 31)));
        assert_eq!(first.gpa, Some(3.8));
    }

    #[test]
    fn test_block_without_degree_or_school_dropped() {
        let entries = parse_education_section("Self-taught via online courses\n");
        assert!(entries.is_empty());
    }

    #[test]
    fn test_gpa_without_label_not_extracted() {
        let entries = parse_education_section("Bachelor of Arts\nSomewhere College\n3.9 average\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].gpa, None);
    }
}
