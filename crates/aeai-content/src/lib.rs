//! AEAI Content — hardcoded fallback content.
//!
//! Every page renders from this crate when the CMS is unreachable or returns
//! nothing; several content families (services, industries, insights, team)
//! are served from here exclusively. The copy is hand-written and versioned
//! with the code.
//!
//! # Modules
//!
//! - [`services`] / [`industries`] / [`insights`] / [`team`]: static-only content
//! - [`jobs`] / [`datasets`] / [`papers`] / [`guides`]: fallbacks for CMS collections
//! - [`pages`]: fallback copy for page singletons

pub mod datasets;
pub mod guides;
pub mod industries;
pub mod insights;
pub mod jobs;
pub mod pages;
pub mod papers;
pub mod services;
pub mod team;
