//! Content model for the site.
//!
//! These are read-only records: fetched (or taken from fallback constants)
//! per request, handed to views as props, and discarded after render. There
//! is no mutation path and no persistence.

pub mod datasets;
pub mod guides;
pub mod industries;
pub mod insights;
pub mod jobs;
pub mod pages;
pub mod papers;
pub mod services;

pub use datasets::{AccessType, Dataset, DatasetDetail};
pub use guides::{Guide, GuideDetail};
pub use industries::{Industry, RelatedLink};
pub use insights::{Author, Insight, Topic};
pub use jobs::{EmploymentType, Job, JobDetail};
pub use pages::{CtaLink, HeroCopy, SectionCopy, Spec, Stat, TeamMember};
pub use papers::{Paper, PaperDetail, PaperStatus};
pub use services::{
    Capability, Challenge, EngagementHighlight, MethodStep, Metric, RelatedProduct, Service,
};
