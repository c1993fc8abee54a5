//! Skill extraction — catalog vocabulary matched against the document plus
//! free-form items from the skills section.
//!
//! Skills are deduplicated case-insensitively with first-seen casing kept.

use crate::catalog::SkillCatalog;
use std::collections::HashSet;

/// Terms shorter than this only match inside the skills section — two-letter
/// names ("Go", "JS") are too noisy to scan for in running prose.
const MIN_PROSE_TERM_CHARS: usize = 3;

/// Longest free-form skills-section item accepted verbatim.
const MAX_ITEM_CHARS: usize = 40;

#[derive(Default)]
struct SkillSet {
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl SkillSet {
    fn push(&mut self, skill: String) {
        let key = skill.to_lowercase();
        if !key.is_empty() && self.seen.insert(key) {
            self.ordered.push(skill);
        }
    }
}

/// Whether `term` occurs in `haystack` bounded by non-alphanumeric chars.
/// Both sides are expected lowercase.
fn contains_term(haystack: &str, term: &str) -> bool {
    for (start, matched) in haystack.match_indices(term) {
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = haystack[start + matched.len()..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if before_ok && after_ok {
            return true;
        }
    }
    false
}

fn looks_like_skill_item(item: &str) -> bool {
    let chars = item.chars().count();
    (2..=MAX_ITEM_CHARS).contains(&chars) && item.chars().any(|c| c.is_alphabetic())
}

/// Extracts the skill list for a profile.
///
/// Skills-section items come first (document order, canonicalized through
/// the alias table, unknown items kept verbatim), then catalog vocabulary
/// hits from the full text in catalog order.
pub fn extract_skills(catalog: &SkillCatalog, full_text: &str, skills_section: &str) -> Vec<String> {
    let mut set = SkillSet::default();

    for item in skills_section.split(|c: char| matches!(c, ',' | ';' | '|' | '•' | '·' | '\n')) {
        let item = item.trim().trim_start_matches(['-', '*', '•']).trim();
        if looks_like_skill_item(item) {
            set.push(catalog.canonical_or_verbatim(item));
        }
    }

    let text_lower = full_text.to_lowercase();
    for (term, canonical) in catalog.terms() {
        if term.chars().count() >= MIN_PROSE_TERM_CHARS && contains_term(&text_lower, term) {
            set.push(canonical.clone());
        }
    }

    set.ordered
}
