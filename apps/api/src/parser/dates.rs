//! Heuristic date-range parsing for experience and education blocks.
//!
//! Supported shapes: "Jan 2022 - Present", "January 2022 – March 2023",
//! "03/2021 - 05/2022", "2020-2024".

use chrono::NaiveDate;
use regex::Regex;

/// A parsed date range. `current` is set when the end marker was
/// "present"/"current"/"now" rather than a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub current: bool,
}

const MONTHS: &[(&str, u32)] = &[
    ("jan", 1),
    ("feb", 2),
    ("mar", 3),
    ("apr", 4),
    ("may", 5),
    ("jun", 6),
    ("jul", 7),
    ("aug", 8),
    ("sep", 9),
    ("oct", 10),
    ("nov", 11),
    ("dec", 12),
];

fn month_number(name: &str) -> Option<u32> {
    let key = name.trim_end_matches('.').to_lowercase();
    MONTHS
        .iter()
        .find(|(prefix, _)| key.starts_with(prefix))
        .map(|&(_, n)| n)
}

/// Parses a single fuzzy date token ("Jan 2022", "03/2021", "2020").
/// `end_of_period` controls which day a bare year resolves to: Jan 1 for a
/// range start, Dec 31 for a range end.
pub fn parse_fuzzy_date(raw: &str, end_of_period: bool) -> Option<NaiveDate> {
    let s = raw.trim();

    // "03/2021"
    if let Some((m, y)) = s.split_once('/') {
        let month: u32 = m.trim().parse().ok()?;
        let year: i32 = y.trim().parse().ok()?;
        if !(1..=12).contains(&month) {
            return None;
        }
        return NaiveDate::from_ymd_opt(year, month, 1);
    }

    // "2020"
    if s.len() == 4 && s.chars().all(|c| c.is_ascii_digit()) {
        let year: i32 = s.parse().ok()?;
        return if end_of_period {
            NaiveDate::from_ymd_opt(year, 12, 31)
        } else {
            NaiveDate::from_ymd_opt(year, 1, 1)
        };
    }

    // "Jan 2022" / "January 2022"
    let mut parts = s.split_whitespace();
    let month = month_number(parts.next()?)?;
    let year: i32 = parts.next()?.trim().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

fn range_regex() -> Regex {
    Regex::new(
        r"(?i)([A-Za-z]{3,9}\.?[ \t]+\d{4}|\d{1,2}/\d{4}|\d{4})[ \t]*(?:-|–|—|to)[ \t]*([A-Za-z]{3,9}\.?[ \t]+\d{4}|\d{1,2}/\d{4}|\d{4}|present|current|now)",
    )
    .expect("static date-range pattern")
}

/// Finds the first plausible date range in a block of text.
/// Returns `None` when nothing date-like parses.
pub fn find_date_range(text: &str) -> Option<DateRange> {
    let re = range_regex();
    for caps in re.captures_iter(text) {
        let start = parse_fuzzy_date(&caps[1], false);
        let end_raw = caps[2].trim().to_lowercase();
        let current = matches!(end_raw.as_str(), "present" | "current" | "now");
        let end = if current {
            None
        } else {
            parse_fuzzy_date(&caps[2], true)
        };

        if start.is_some() || end.is_some() || current {
            return Some(DateRange {
                start,
                end,
                current,
            });
        }
    }
    None
}
