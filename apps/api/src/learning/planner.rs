//! Learning path generation — a staged, time-boxed curriculum closing a
//! skill gap.
//!
//! Core invariant: the stages partition the missing skills exactly — every
//! skill appears in exactly one stage, none dropped, none duplicated.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

const WEEKS_PER_MONTH: u32 = 4;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stage {
    pub title: String,
    pub duration_weeks: u32,
    pub skills_covered: Vec<String>,
    pub suggested_resources: Vec<String>,
}

/// Distributes `missing_skills` across `min(horizon_months, skill count)`
/// stages, sizes differing by at most one, with the horizon's weeks split
/// the same way.
///
/// Zero stages for an empty skill set; `InvalidInput` for a zero horizon.
pub fn generate_learning_path(
    missing_skills: &[String],
    horizon_months: u32,
) -> Result<Vec<Stage>, AppError> {
    if horizon_months == 0 {
        return Err(AppError::InvalidInput(
            "horizon_months must be a positive number of months".to_string(),
        ));
    }

    // Deterministic plan regardless of input order; dedup case-insensitively.
    let mut skills: Vec<String> = Vec::new();
    for skill in missing_skills {
        let skill = skill.trim();
        if !skill.is_empty()
            && !skills.iter().any(|s| s.eq_ignore_ascii_case(skill))
        {
            skills.push(skill.to_string());
        }
    }
    skills.sort_by_key(|s| s.to_lowercase());

    if skills.is_empty() {
        return Ok(Vec::new());
    }

    let stage_count = (horizon_months as usize).min(skills.len());
    let base_size = skills.len() / stage_count;
    let extra_skills = skills.len() % stage_count;

    let total_weeks = horizon_months * WEEKS_PER_MONTH;
    let base_weeks = total_weeks / stage_count as u32;
    let extra_weeks = total_weeks % stage_count as u32;

    let mut stages = Vec::with_capacity(stage_count);
    let mut cursor = 0usize;
    for index in 0..stage_count {
        let take = base_size + usize::from(index < extra_skills);
        let covered: Vec<String> = skills[cursor..cursor + take].to_vec();
        cursor += take;

        let duration_weeks = base_weeks + u32::from((index as u32) < extra_weeks);
        let suggested_resources = covered
            .iter()
            .flat_map(|skill| {
                [
                    format!("Online course for {skill}"),
                    format!("Build a hands-on project using {skill}"),
                ]
            })
            .collect();

        stages.push(Stage {
            title: format!("Stage {}: {}", index + 1, covered.join(", ")),
            duration_weeks,
            skills_covered: covered,
            suggested_resources,
        });
    }

    Ok(stages)
}
