//! Research papers for the research pages.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Publication status of a paper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaperStatus {
    /// Circulating working paper.
    WorkingPaper,
    /// Published in a journal or series.
    Published,
    /// Policy brief.
    PolicyBrief,
}

impl PaperStatus {
    /// Badge label for the paper.
    pub fn label(&self) -> &'static str {
        match self {
            Self::WorkingPaper => "Working Paper",
            Self::Published => "Published",
            Self::PolicyBrief => "Policy Brief",
        }
    }

    /// CSS badge class for the paper.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::WorkingPaper => "badge badge-amber",
            Self::Published => "badge badge-green",
            Self::PolicyBrief => "badge badge-teal",
        }
    }

    /// Parse the CMS wire value, defaulting to working paper.
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "published" => Self::Published,
            "policy_brief" => Self::PolicyBrief,
            _ => Self::WorkingPaper,
        }
    }
}

/// A paper as shown in the research listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paper {
    /// Paper title.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// Abstract text, paragraphs separated by blank lines.
    pub abstract_text: String,
    /// Publication status.
    pub status: PaperStatus,
    /// Venue, e.g. `NBER Working Paper`.
    pub publication_venue: Option<String>,
    /// Publication date.
    pub publication_date: Option<NaiveDate>,
    /// Author names in listing order.
    pub authors: Vec<String>,
    /// Whether the paper is featured.
    pub featured: bool,
}

impl Paper {
    /// Abstract excerpt for the listing: markup stripped, clipped to
    /// `max_len` characters with an ellipsis when truncated.
    pub fn abstract_excerpt(&self, max_len: usize) -> String {
        let plain = strip_tags(&self.abstract_text);
        if plain.chars().count() <= max_len {
            plain
        } else {
            let clipped: String = plain.chars().take(max_len).collect();
            format!("{clipped}...")
        }
    }
}

/// Full paper record for the detail page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperDetail {
    /// Paper title.
    pub title: String,
    /// Abstract text, paragraphs separated by blank lines.
    pub abstract_text: String,
    /// Publication status.
    pub status: PaperStatus,
    /// Venue, when published.
    pub publication_venue: Option<String>,
    /// Publication date.
    pub publication_date: Option<NaiveDate>,
    /// Author names.
    pub authors: Vec<String>,
    /// Headline findings, shown as a numbered list.
    pub key_findings: Vec<String>,
    /// APA-style citation.
    pub citation_apa: Option<String>,
    /// Link to the PDF.
    pub pdf_link: Option<String>,
}

/// Remove anything that looks like an HTML tag from CMS-supplied rich text.
fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    for ch in input.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(abstract_text: &str) -> Paper {
        Paper {
            title: "T".into(),
            slug: "t".into(),
            abstract_text: abstract_text.into(),
            status: PaperStatus::WorkingPaper,
            publication_venue: None,
            publication_date: None,
            authors: vec![],
            featured: false,
        }
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(PaperStatus::WorkingPaper.label(), "Working Paper");
        assert_eq!(PaperStatus::PolicyBrief.label(), "Policy Brief");
    }

    #[test]
    fn test_status_parse_defaults_working_paper() {
        assert_eq!(
            PaperStatus::parse_or_default("published"),
            PaperStatus::Published
        );
        assert_eq!(
            PaperStatus::parse_or_default(""),
            PaperStatus::WorkingPaper
        );
    }

    #[test]
    fn test_abstract_excerpt_short_text_unchanged() {
        let p = paper("Short abstract.");
        assert_eq!(p.abstract_excerpt(250), "Short abstract.");
    }

    #[test]
    fn test_abstract_excerpt_clips_long_text() {
        let p = paper(&"a".repeat(300));
        let excerpt = p.abstract_excerpt(250);
        assert_eq!(excerpt.chars().count(), 253);
        assert!(excerpt.ends_with("..."));
    }

    #[test]
    fn test_abstract_excerpt_strips_markup() {
        let p = paper("We find <strong>large</strong> effects.");
        assert_eq!(p.abstract_excerpt(250), "We find large effects.");
    }
}
