//! Shared building blocks for page singletons and section components.

use serde::{Deserialize, Serialize};

/// Hero copy for a page: headline plus optional standfirst.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroCopy {
    /// Main headline.
    pub headline: String,
    /// Supporting line under the headline.
    pub subheadline: String,
}

impl HeroCopy {
    /// Construct hero copy.
    pub fn new(headline: impl Into<String>, subheadline: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            subheadline: subheadline.into(),
        }
    }
}

/// A titled block of prose (story, mission, approach, fellowship...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionCopy {
    /// Section title.
    pub title: String,
    /// Body copy, paragraphs separated by blank lines.
    pub content: String,
}

impl SectionCopy {
    /// Construct section copy.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// A labelled statistic for stat grids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    /// Stat value, e.g. `250M+`.
    pub value: String,
    /// Upper-case label.
    pub label: String,
}

impl Stat {
    /// Construct a stat.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A labelled specification tile (key specs strips, at-a-glance grids).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spec {
    /// Upper-case label.
    pub label: String,
    /// Value line.
    pub value: String,
}

impl Spec {
    /// Construct a spec tile.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A call-to-action link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CtaLink {
    /// Button label.
    pub label: String,
    /// Target URL.
    pub url: String,
}

impl CtaLink {
    /// Construct a CTA link.
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// A team member bio for the about page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    /// Full name.
    pub name: String,
    /// Role within the firm.
    pub title: String,
    /// Biography paragraph.
    pub bio: String,
    /// Portrait image path.
    pub photo_url: String,
    /// Institutional affiliations.
    pub affiliations: Vec<String>,
    /// Selected research, one line per item.
    pub selected_work: Vec<String>,
    /// Selected presentations, one line per item.
    pub selected_presentations: Vec<String>,
}
