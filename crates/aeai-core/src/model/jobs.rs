//! Job postings for the careers pages.

use serde::{Deserialize, Serialize};

/// Employment type of a job posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    /// Full-time position
    FullTime,
    /// Part-time position
    PartTime,
    /// Internship
    Internship,
    /// Fellowship (e.g. the summer research programme)
    Fellowship,
    /// Fixed-term contract
    Contract,
}

impl EmploymentType {
    /// Badge label shown next to the posting.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::Internship => "Internship",
            Self::Fellowship => "Fellowship",
            Self::Contract => "Contract",
        }
    }

    /// CSS badge class for the posting type.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::FullTime => "badge badge-green",
            Self::PartTime => "badge badge-blue",
            Self::Internship => "badge badge-purple",
            Self::Fellowship => "badge badge-amber",
            Self::Contract => "badge badge-gray",
        }
    }

    /// Parse the CMS wire value, defaulting to full-time for unknown input.
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "part_time" => Self::PartTime,
            "internship" => Self::Internship,
            "fellowship" => Self::Fellowship,
            "contract" => Self::Contract,
            _ => Self::FullTime,
        }
    }
}

/// A job posting as shown in the careers listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Posting title.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// Office location.
    pub location: String,
    /// Employment type.
    pub kind: EmploymentType,
    /// Owning department, if any.
    pub department: Option<String>,
    /// Whether the posting is featured.
    pub featured: bool,
}

/// A job posting with the full description for the detail page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDetail {
    /// Posting title.
    pub title: String,
    /// Office location.
    pub location: String,
    /// Employment type.
    pub kind: EmploymentType,
    /// Owning department, if any.
    pub department: Option<String>,
    /// Role description, paragraphs separated by blank lines.
    pub description: String,
    /// Requirements in `**Section:**` + bullet format.
    pub requirements: String,
    /// Application link; the contact page is used when absent.
    pub apply_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employment_type_labels() {
        assert_eq!(EmploymentType::FullTime.label(), "Full-time");
        assert_eq!(EmploymentType::Fellowship.label(), "Fellowship");
    }

    #[test]
    fn test_employment_type_parse() {
        assert_eq!(
            EmploymentType::parse_or_default("fellowship"),
            EmploymentType::Fellowship
        );
        // Unknown values default to full-time, matching the listing page.
        assert_eq!(
            EmploymentType::parse_or_default("gibberish"),
            EmploymentType::FullTime
        );
        assert_eq!(
            EmploymentType::parse_or_default(""),
            EmploymentType::FullTime
        );
    }

    #[test]
    fn test_employment_type_serde_wire_format() {
        let json = serde_json::to_string(&EmploymentType::FullTime).unwrap();
        assert_eq!(json, "\"full_time\"");
        let parsed: EmploymentType = serde_json::from_str("\"part_time\"").unwrap();
        assert_eq!(parsed, EmploymentType::PartTime);
    }
}
