//! Section segmentation — splits raw resume text into the blocks the
//! per-section extractors consume.
//!
//! A heading is a short line (optionally ending in ':') whose text matches a
//! known section keyword. Everything before the first heading is the
//! preamble (name, contact lines, sometimes an untitled summary).

/// Longest line still considered a candidate heading.
const MAX_HEADING_CHARS: usize = 40;

const SUMMARY_HEADINGS: &[&str] = &[
    "summary",
    "professional summary",
    "profile",
    "about",
    "about me",
    "objective",
    "career objective",
];

const SKILLS_HEADINGS: &[&str] = &[
    "skills",
    "technical skills",
    "technologies",
    "core competencies",
    "tech stack",
];

const EXPERIENCE_HEADINGS: &[&str] = &[
    "experience",
    "work experience",
    "work history",
    "employment",
    "employment history",
    "professional experience",
    "career",
];

const EDUCATION_HEADINGS: &[&str] = &[
    "education",
    "academic background",
    "academics",
    "education and training",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionKind {
    Summary,
    Skills,
    Experience,
    Education,
    /// Recognized as a heading but not one we extract from (certifications,
    /// languages, references, ...). Content is collected nowhere.
    Other,
}

/// Resume text split into the sections the extractors care about.
/// Absent sections are empty strings — extraction degrades, never fails.
#[derive(Debug, Default, Clone)]
pub struct SegmentedResume {
    pub preamble: String,
    pub summary: String,
    pub skills: String,
    pub experience: String,
    pub education: String,
}

/// Matches a candidate heading line to a section kind.
fn classify_heading(line: &str) -> Option<SectionKind> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.chars().count() > MAX_HEADING_CHARS {
        return None;
    }
    let normalized = trimmed.trim_end_matches(':').trim().to_lowercase();

    let lists = [
        (SUMMARY_HEADINGS, SectionKind::Summary),
        (SKILLS_HEADINGS, SectionKind::Skills),
        (EXPERIENCE_HEADINGS, SectionKind::Experience),
        (EDUCATION_HEADINGS, SectionKind::Education),
    ];
    for (headings, kind) in lists {
        if headings.contains(&normalized.as_str()) {
            return Some(kind);
        }
    }

    // "Certifications", "Languages", "Projects" and friends still end the
    // current section, so their content does not bleed into it.
    const OTHER_HEADINGS: &[&str] = &[
        "certifications",
        "certificates",
        "languages",
        "projects",
        "portfolio",
        "publications",
        "awards",
        "references",
        "interests",
        "volunteering",
    ];
    if OTHER_HEADINGS.contains(&normalized.as_str()) {
        return Some(SectionKind::Other);
    }
    None
}

/// Splits resume text into preamble plus the known sections.
///
/// Inline headings ("Skills: Python, SQL") keep their same-line content.
pub fn segment(text: &str) -> SegmentedResume {
    let mut out = SegmentedResume::default();
    let mut current: Option<SectionKind> = None;

    for line in text.lines() {
        let mut content = line;

        if let Some(kind) = classify_heading(line) {
            current = Some(kind);
            continue;
        }
        // Inline heading with content after the colon.
        if let Some((head, rest)) = line.split_once(':') {
            if let Some(kind) = classify_heading(head) {
                current = Some(kind);
                content = rest;
                if content.trim().is_empty() {
                    continue;
                }
            }
        }

        let target = match current {
            None => &mut out.preamble,
            Some(SectionKind::Summary) => &mut out.summary,
            Some(SectionKind::Skills) => &mut out.skills,
            Some(SectionKind::Experience) => &mut out.experience,
            Some(SectionKind::Education) => &mut out.education,
            Some(SectionKind::Other) => continue,
        };
        target.push_str(content);
        target.push('\n');
    }

    out
}
