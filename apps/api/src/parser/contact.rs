//! Contact extraction — email/phone patterns, profile links, name and
//! location heuristics over the document preamble.

use regex::Regex;

/// How many leading lines are scanned for a candidate name.
const NAME_SCAN_LINES: usize = 10;

#[derive(Debug, Default, Clone)]
pub struct ContactInfo {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub links: Vec<String>,
}

/// Compiled contact patterns, built once at startup and reused per request.
#[derive(Debug)]
pub struct ContactPatterns {
    email: Regex,
    phone: Regex,
    url: Regex,
    linkedin: Regex,
    github: Regex,
    labeled_location: Regex,
    city_region: Regex,
}

impl ContactPatterns {
    pub fn new() -> Self {
        Self {
            email: Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}")
                .expect("static email pattern"),
            phone: Regex::new(r"(?:\+?\d{1,2}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}")
                .expect("static phone pattern"),
            url: Regex::new(r"https?://[^\s<>()\[\]]+").expect("static url pattern"),
            linkedin: Regex::new(r"(?:https?://)?(?:www\.)?linkedin\.com/in/[A-Za-z0-9_-]+/?")
                .expect("static linkedin pattern"),
            github: Regex::new(r"(?:https?://)?(?:www\.)?github\.com/[A-Za-z0-9_-]+/?")
                .expect("static github pattern"),
            labeled_location: Regex::new(r"(?im)^(?:location|based in)[:\s]+(.+)$")
                .expect("static location pattern"),
            city_region: Regex::new(
                r"\b([A-Z][a-zA-Z]+(?: [A-Z][a-zA-Z]+)*,\s*(?:[A-Z]{2}\b|[A-Z][a-z]+))",
            )
            .expect("static city pattern"),
        }
    }

    /// Extracts contact details. `full_text` is scanned for patterns,
    /// `preamble` for the name/location heuristics.
    pub fn extract(&self, full_text: &str, preamble: &str) -> ContactInfo {
        let email = self.email.find(full_text).map(|m| m.as_str().to_string());
        let phone = self.phone.find(full_text).map(|m| m.as_str().to_string());

        let mut links = Vec::new();
        for re in [&self.linkedin, &self.github, &self.url] {
            for m in re.find_iter(full_text) {
                let link = m.as_str().trim_end_matches(['.', ',']).to_string();
                if !links
                    .iter()
                    .any(|l: &String| l.eq_ignore_ascii_case(&link) || l.contains(&link))
                {
                    links.push(link);
                }
            }
        }

        let full_name = self.extract_name(preamble);
        let location = self
            .labeled_location
            .captures(full_text)
            .map(|c| c[1].trim().to_string())
            .or_else(|| {
                self.city_region
                    .captures(preamble)
                    .map(|c| c[1].trim().to_string())
            });

        ContactInfo {
            full_name,
            email,
            phone,
            location,
            links,
        }
    }

    /// The first early line that is not contact data, a heading, or noise is
    /// taken as the candidate's name.
    fn extract_name(&self, preamble: &str) -> Option<String> {
        preamble
            .lines()
            .filter(|l| !l.trim().is_empty())
            .take(NAME_SCAN_LINES)
            .map(str::trim)
            .find(|line| {
                let char_count = line.chars().count();
                (2..=50).contains(&char_count)
                    && !line.contains('@')
                    && !line.to_lowercase().contains("http")
                    && !line.chars().any(|c| c.is_ascii_digit())
                    && !(line.chars().all(|c| !c.is_lowercase()) && char_count > 3)
            })
            .map(str::to_string)
    }
}

impl Default for ContactPatterns {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "\
Jane Doe
jane.doe@example.com | (415) 555-0199
San Francisco, CA
https://github.com/janedoe
linkedin.com/in/janedoe
";

    fn patterns() -> ContactPatterns {
        ContactPatterns::new()
    }

    #[test]
    fn test_email_extracted_exactly() {
        let info = patterns().extract(HEADER, HEADER);
        assert_eq!(info.email.as_deref(), Some("jane.doe@example.com"));
    }

    #[test]
    fn test_phone_extracted() {
        let info = patterns().extract(HEADER, HEADER);
        assert_eq!(info.phone.as_deref(), Some("(415) 555-0199"));
    }

    #[test]
    fn test_name_is_first_plausible_line() {
        let info = patterns().extract(HEADER, HEADER);
        assert_eq!(info.full_name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_all_caps_line_is_not_a_name() {
        let text = "RESUME\nJohn Smith\njohn@example.com\n";
        let info = patterns().extract(text, text);
        assert_eq!(info.full_name.as_deref(), Some("John Smith"));
    }

    #[test]
    fn test_city_state_location() {
        let info = patterns().extract(HEADER, HEADER);
        assert_eq!(info.location.as_deref(), Some("San Francisco, CA"));
    }

    #[test]
    fn test_labeled_location_wins() {
        let text = "Jane Doe\nLocation: Remote (EU)\n";
        let info = patterns().extract(text, text);
        assert_eq!(info.location.as_deref(), Some("Remote (EU)"));
    }

    #[test]
    fn test_links_deduplicate_schemeless_duplicates() {
        let info = patterns().extract(HEADER, HEADER);
        // github appears once (scheme form contains the schemeless form).
        let github_count = info
            .links
            .iter()
            .filter(|l| l.to_lowercase().contains("github.com"))
            .count();
        assert_eq!(github_count, 1);
        assert!(info
            .links
            .iter()
            .any(|l| l.contains("linkedin.com/in/janedoe")));
    }

    #[test]
    fn test_no_contact_data_yields_defaults() {
        let info = patterns().extract("plain words only", "plain words only");
        assert!(info.email.is_none());
        assert!(info.phone.is_none());
        assert!(info.links.is_empty());
    }
}
