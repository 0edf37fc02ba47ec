//! Industry verticals served by the firm.

use serde::{Deserialize, Serialize};

use super::pages::Spec;

/// A named link to a service or data product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedLink {
    /// Display name.
    pub name: String,
    /// Target slug.
    pub slug: String,
}

impl RelatedLink {
    /// Construct a related link.
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
        }
    }
}

/// An industry vertical.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Industry {
    /// Industry name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Detail-page headline.
    pub headline: String,
    /// One-paragraph description.
    pub description: String,
    /// At-a-glance specification tiles.
    pub specs: Vec<Spec>,
    /// "How we help" copy, paragraphs separated by blank lines.
    pub how_we_help: String,
    /// Related service lines.
    pub related_services: Vec<RelatedLink>,
    /// Related data products.
    pub related_data: Vec<RelatedLink>,
    /// CTA headline for the closing band.
    pub cta_headline: String,
    /// CTA description for the closing band.
    pub cta_description: String,
}
