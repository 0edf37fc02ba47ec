//! Data products for the data pages.

use serde::{Deserialize, Serialize};

/// Access model of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessType {
    /// Freely downloadable.
    Open,
    /// Licensed; access on request.
    Commercial,
}

impl AccessType {
    /// Badge label for the dataset card.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Open => "Open Access",
            Self::Commercial => "Commercial",
        }
    }

    /// CSS badge class for the dataset card.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Open => "badge badge-green",
            Self::Commercial => "badge badge-purple",
        }
    }

    /// Parse the CMS wire value, defaulting to open access.
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "commercial" => Self::Commercial,
            _ => Self::Open,
        }
    }
}

/// A dataset as shown in the data-products listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// Dataset title.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// One-paragraph description.
    pub description: String,
    /// Access model.
    pub access: AccessType,
    /// Time period covered, e.g. `2019–present`.
    pub coverage_time_period: Option<String>,
    /// Geography covered.
    pub coverage_geography: Option<String>,
    /// Update cadence, e.g. `Annual`.
    pub update_frequency: Option<String>,
    /// Whether the dataset is featured.
    pub featured: bool,
}

/// Full dataset record for the detail page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetDetail {
    /// Dataset title.
    pub title: String,
    /// One-paragraph description.
    pub description: String,
    /// Access model.
    pub access: AccessType,
    /// Time period covered.
    pub coverage_time_period: Option<String>,
    /// Geography covered.
    pub coverage_geography: Option<String>,
    /// Observation granularity.
    pub granularity: Option<String>,
    /// Update cadence.
    pub update_frequency: Option<String>,
    /// Construction methodology, paragraphs separated by blank lines.
    pub methodology: Option<String>,
    /// License and terms summary.
    pub license: Option<String>,
    /// Direct download link for open datasets.
    pub download_link: Option<String>,
}

impl DatasetDetail {
    /// Whether the detail page should offer a direct download.
    ///
    /// Only open datasets with a configured link download directly; everything
    /// else routes through the contact page.
    pub fn is_downloadable(&self) -> bool {
        self.access == AccessType::Open && self.download_link.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_type_labels() {
        assert_eq!(AccessType::Open.label(), "Open Access");
        assert_eq!(AccessType::Commercial.label(), "Commercial");
    }

    #[test]
    fn test_access_type_parse_defaults_open() {
        assert_eq!(
            AccessType::parse_or_default("commercial"),
            AccessType::Commercial
        );
        assert_eq!(AccessType::parse_or_default("unknown"), AccessType::Open);
    }

    #[test]
    fn test_downloadable_requires_open_and_link() {
        let mut detail = DatasetDetail {
            title: "Test".into(),
            description: String::new(),
            access: AccessType::Commercial,
            coverage_time_period: None,
            coverage_geography: None,
            granularity: None,
            update_frequency: None,
            methodology: None,
            license: None,
            download_link: Some("https://example.org/data.csv".into()),
        };
        assert!(!detail.is_downloadable());

        detail.access = AccessType::Open;
        assert!(detail.is_downloadable());

        detail.download_link = None;
        assert!(!detail.is_downloadable());
    }
}
