//! Methodological guides published by the lab.

use serde::{Deserialize, Serialize};

/// A guide as shown on the lab page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guide {
    /// Guide title.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// One-paragraph summary.
    pub summary: String,
}

/// Full guide record for the detail page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuideDetail {
    /// Guide title.
    pub title: String,
    /// One-paragraph summary shown under the title.
    pub summary: String,
    /// Guide body in the block markup format (`# `/`## ` headings, bullet
    /// lists, fenced code blocks).
    pub body: String,
    /// Author names.
    pub authors: Vec<String>,
}
