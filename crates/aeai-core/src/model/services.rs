//! Consulting service lines.

use serde::{Deserialize, Serialize};

use super::pages::Spec;

/// A client problem the service addresses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Challenge {
    /// Short problem statement.
    pub title: String,
    /// Expanded description.
    pub description: String,
}

/// One step of the engagement methodology.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodStep {
    /// Step name.
    pub title: String,
    /// What happens in this step.
    pub description: String,
    /// Whether this is the core analytical step, highlighted in the timeline.
    pub is_core: bool,
}

/// A capability offered within the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capability {
    /// Capability name.
    pub title: String,
    /// What the capability covers.
    pub description: String,
    /// Comma-separated deliverables line.
    pub deliverables: String,
}

/// A headline metric in an engagement highlight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metric {
    /// Metric value, e.g. `40M+`.
    pub value: String,
    /// Upper-case metric label.
    pub label: String,
}

/// A showcased past engagement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementHighlight {
    /// Engagement title.
    pub title: String,
    /// Engagement summary.
    pub description: String,
    /// Headline metrics.
    pub metrics: Vec<Metric>,
}

/// A data product related to the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedProduct {
    /// Product name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Data-product slug.
    pub slug: String,
}

/// A consulting service line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    /// Service name.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// Position in listings.
    pub order: u32,
    /// Card summary.
    pub summary: String,
    /// One-line proof point shown on the services index.
    pub proof_point: String,
    /// Detail-page headline.
    pub headline: String,
    /// Detail-page introduction.
    pub introduction: String,
    /// Key specification tiles.
    pub key_specs: Vec<Spec>,
    /// Client challenges addressed.
    pub challenges: Vec<Challenge>,
    /// Engagement methodology steps.
    pub methodology: Vec<MethodStep>,
    /// Capabilities offered.
    pub capabilities: Vec<Capability>,
    /// Showcased engagement.
    pub engagement_highlight: EngagementHighlight,
    /// Related data products.
    pub related_data_products: Vec<RelatedProduct>,
    /// CTA headline for the closing band.
    pub cta_headline: String,
    /// CTA description for the closing band.
    pub cta_description: String,
}
