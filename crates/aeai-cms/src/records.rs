//! Wire records for CMS payloads.
//!
//! The content API returns loosely-typed JSON; every field here is optional
//! and unknown fields are ignored. Conversion into the site's model types
//! applies the same defaults the pages expect: empty or missing strings fall
//! back to neutral values, enums parse leniently.

use aeai_core::model::{
    Dataset, DatasetDetail, EmploymentType, Guide, GuideDetail, HeroCopy, Job, JobDetail,
    AccessType, Paper, PaperDetail, PaperStatus, Stat,
};
use aeai_core::util::parse_iso_date;
use chrono::NaiveDate;
use serde::Deserialize;

/// Treat a missing or empty string as absent, substituting `fallback`.
fn text_or(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(s) if !s.is_empty() => s,
        _ => fallback.to_string(),
    }
}

/// Empty strings become `None`.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn parse_date(value: Option<String>) -> Option<NaiveDate> {
    value.as_deref().and_then(parse_iso_date)
}

// ----------------------------------------------------------------------------
// Collections
// ----------------------------------------------------------------------------

/// A job posting as the CMS returns it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobRecord {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub department: Option<String>,
    pub featured: Option<bool>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub apply_url: Option<String>,
}

impl JobRecord {
    /// Listing conversion with the careers-page defaults.
    pub fn into_job(self) -> Job {
        Job {
            title: text_or(self.title, "Position"),
            slug: self.slug.unwrap_or_default(),
            location: text_or(self.location, "TBD"),
            kind: EmploymentType::parse_or_default(self.kind.as_deref().unwrap_or_default()),
            department: non_empty(self.department),
            featured: self.featured.unwrap_or(false),
        }
    }

    /// Detail conversion for the job page.
    pub fn into_detail(self) -> JobDetail {
        JobDetail {
            title: text_or(self.title, "Open Position"),
            location: text_or(self.location, "London"),
            kind: EmploymentType::parse_or_default(self.kind.as_deref().unwrap_or_default()),
            department: non_empty(self.department),
            description: self.description.unwrap_or_default(),
            requirements: self.requirements.unwrap_or_default(),
            apply_url: non_empty(self.apply_url),
        }
    }
}

/// A dataset as the CMS returns it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DatasetRecord {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub access_type: Option<String>,
    pub coverage_time_period: Option<String>,
    pub coverage_geography: Option<String>,
    pub granularity: Option<String>,
    pub update_frequency: Option<String>,
    pub methodology: Option<String>,
    pub license: Option<String>,
    pub download_link: Option<String>,
    pub featured: Option<bool>,
}

impl DatasetRecord {
    /// Listing conversion with the data-page defaults.
    pub fn into_dataset(self) -> Dataset {
        Dataset {
            title: text_or(self.title, "Dataset"),
            slug: self.slug.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            access: AccessType::parse_or_default(self.access_type.as_deref().unwrap_or_default()),
            coverage_time_period: non_empty(self.coverage_time_period),
            coverage_geography: non_empty(self.coverage_geography),
            update_frequency: non_empty(self.update_frequency),
            featured: self.featured.unwrap_or(false),
        }
    }

    /// Detail conversion for the dataset page.
    pub fn into_detail(self) -> DatasetDetail {
        DatasetDetail {
            title: text_or(self.title, "Dataset"),
            description: self.description.unwrap_or_default(),
            access: AccessType::parse_or_default(self.access_type.as_deref().unwrap_or_default()),
            coverage_time_period: non_empty(self.coverage_time_period),
            coverage_geography: non_empty(self.coverage_geography),
            granularity: non_empty(self.granularity),
            update_frequency: non_empty(self.update_frequency),
            methodology: non_empty(self.methodology),
            license: non_empty(self.license),
            download_link: non_empty(self.download_link),
        }
    }
}

/// An embedded author reference.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthorRef {
    pub name: Option<String>,
}

/// An embedded key finding.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FindingRecord {
    pub finding: Option<String>,
}

/// A research paper as the CMS returns it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaperRecord {
    pub title: Option<String>,
    pub slug: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub status: Option<String>,
    pub publication_venue: Option<String>,
    pub publication_date: Option<String>,
    pub authors: Vec<AuthorRef>,
    pub key_findings: Vec<FindingRecord>,
    pub citation_apa: Option<String>,
    pub pdf_link: Option<String>,
    pub featured: Option<bool>,
}

impl PaperRecord {
    fn author_names(authors: Vec<AuthorRef>) -> Vec<String> {
        authors.into_iter().filter_map(|a| a.name).collect()
    }

    /// Listing conversion with the research-page defaults.
    pub fn into_paper(self) -> Paper {
        Paper {
            title: text_or(self.title, "Untitled"),
            slug: self.slug.unwrap_or_default(),
            abstract_text: self.abstract_text.unwrap_or_default(),
            status: PaperStatus::parse_or_default(self.status.as_deref().unwrap_or_default()),
            publication_venue: non_empty(self.publication_venue),
            publication_date: parse_date(self.publication_date),
            authors: Self::author_names(self.authors),
            featured: self.featured.unwrap_or(false),
        }
    }

    /// Detail conversion for the paper page.
    pub fn into_detail(self) -> PaperDetail {
        PaperDetail {
            title: text_or(self.title, "Research Paper"),
            abstract_text: self.abstract_text.unwrap_or_default(),
            status: PaperStatus::parse_or_default(self.status.as_deref().unwrap_or_default()),
            publication_venue: non_empty(self.publication_venue),
            publication_date: parse_date(self.publication_date),
            authors: Self::author_names(self.authors),
            key_findings: self
                .key_findings
                .into_iter()
                .filter_map(|f| f.finding)
                .collect(),
            citation_apa: non_empty(self.citation_apa),
            pdf_link: non_empty(self.pdf_link),
        }
    }
}

/// A lab guide as the CMS returns it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GuideRecord {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub authors: Vec<AuthorRef>,
    pub order: Option<u32>,
}

impl GuideRecord {
    /// Listing conversion with the lab-page defaults.
    pub fn into_guide(self) -> Guide {
        Guide {
            title: text_or(self.title, "Guide"),
            slug: self.slug.unwrap_or_default(),
            summary: self.summary.unwrap_or_default(),
        }
    }

    /// Detail conversion for the guide page.
    pub fn into_detail(self) -> GuideDetail {
        GuideDetail {
            title: text_or(self.title, "Guide"),
            summary: self.summary.unwrap_or_default(),
            body: self.body.unwrap_or_default(),
            authors: self.authors.into_iter().filter_map(|a| a.name).collect(),
        }
    }
}

// ----------------------------------------------------------------------------
// Page singletons
// ----------------------------------------------------------------------------

/// Hero component embedded in page singletons.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HeroRecord {
    pub headline: Option<String>,
    pub subheadline: Option<String>,
}

impl HeroRecord {
    /// Merge with fallback copy, field by field.
    pub fn merge_into(self, fallback: HeroCopy) -> HeroCopy {
        HeroCopy {
            headline: text_or(self.headline, &fallback.headline),
            subheadline: text_or(self.subheadline, &fallback.subheadline),
        }
    }
}

/// Embedded stat component.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StatRecord {
    pub value: Option<String>,
    pub label: Option<String>,
}

impl StatRecord {
    /// Conversion with empty-string defaults, as the about page applies.
    pub fn into_stat(self) -> Stat {
        Stat {
            value: self.value.unwrap_or_default(),
            label: self.label.unwrap_or_default(),
        }
    }
}

/// Embedded CTA component.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CtaRecord {
    pub label: Option<String>,
    pub url: Option<String>,
}

/// The careers-page singleton.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CareersPageRecord {
    pub hero: Option<HeroRecord>,
}

/// The about-page singleton.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AboutPageRecord {
    pub hero: Option<HeroRecord>,
    pub story_title: Option<String>,
    pub story_content: Option<String>,
    pub mission_title: Option<String>,
    pub mission_content: Option<String>,
    pub approach_title: Option<String>,
    pub approach_content: Option<String>,
    pub stats: Vec<StatRecord>,
}

/// The lab-page singleton.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LabPageRecord {
    pub hero: Option<HeroRecord>,
    pub about_title: Option<String>,
    pub about_content: Option<String>,
    pub fellowship_title: Option<String>,
    pub fellowship_content: Option<String>,
    pub fellowship_cta: Option<CtaRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_record_listing_defaults() {
        let record: JobRecord = serde_json::from_str("{}").unwrap();
        let job = record.into_job();
        assert_eq!(job.title, "Position");
        assert_eq!(job.location, "TBD");
        assert_eq!(job.kind, EmploymentType::FullTime);
        assert!(job.department.is_none());
        assert!(!job.featured);
    }

    #[test]
    fn test_job_record_full_payload() {
        let json = r#"{
            "title": "Data Analyst",
            "slug": "data-analyst",
            "location": "London",
            "type": "full_time",
            "department": "Data Products",
            "featured": true
        }"#;
        let record: JobRecord = serde_json::from_str(json).unwrap();
        let job = record.into_job();
        assert_eq!(job.title, "Data Analyst");
        assert_eq!(job.department.as_deref(), Some("Data Products"));
        assert!(job.featured);
    }

    #[test]
    fn test_empty_strings_treated_as_missing() {
        let json = r#"{"title": "", "department": ""}"#;
        let record: JobRecord = serde_json::from_str(json).unwrap();
        let job = record.into_job();
        assert_eq!(job.title, "Position");
        assert!(job.department.is_none());
    }

    #[test]
    fn test_dataset_record_unknown_access_type_defaults_open() {
        let json = r#"{"title": "X", "accessType": "secret"}"#;
        let record: DatasetRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.into_dataset().access, AccessType::Open);
    }

    #[test]
    fn test_paper_record_authors_and_findings_flatten() {
        let json = r#"{
            "title": "T",
            "status": "published",
            "publicationDate": "2024-03-15",
            "authors": [{"name": "A"}, {"name": "B"}, {}],
            "keyFindings": [{"finding": "f1"}, {}]
        }"#;
        let record: PaperRecord = serde_json::from_str(json).unwrap();
        let detail = record.into_detail();
        assert_eq!(detail.authors, vec!["A", "B"]);
        assert_eq!(detail.key_findings, vec!["f1"]);
        assert_eq!(detail.status, PaperStatus::Published);
        assert!(detail.publication_date.is_some());
    }

    #[test]
    fn test_paper_record_bad_date_is_none() {
        let json = r#"{"publicationDate": "soon"}"#;
        let record: PaperRecord = serde_json::from_str(json).unwrap();
        assert!(record.into_paper().publication_date.is_none());
    }

    #[test]
    fn test_hero_record_merge() {
        let fallback = HeroCopy::new("Default H", "Default S");
        let record = HeroRecord {
            headline: Some("CMS H".into()),
            subheadline: None,
        };
        let merged = record.merge_into(fallback);
        assert_eq!(merged.headline, "CMS H");
        assert_eq!(merged.subheadline, "Default S");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = r#"{"title": "G", "body": "b", "publishedAt": "x", "blocks": [1, 2]}"#;
        let record: GuideRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.into_detail().title, "G");
    }
}
