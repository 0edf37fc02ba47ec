//! AEAI CMS — thin client for the headless content API.
//!
//! Pages fetch their content through [`CmsClient`] and fall back to the
//! constants in `aeai-content` on any failure. The wire protocol is a plain
//! HTTP GET per collection or singleton with `populate`/`filters`/`sort`/
//! `pagination` query parameters and a `{ data, meta }` response envelope.
//!
//! # Modules
//!
//! - [`client`]: the HTTP client and response envelope
//! - [`query`]: query-parameter builder
//! - [`records`]: loosely-typed wire records and model conversions

pub mod client;
pub mod query;
pub mod records;

pub use client::{CmsClient, CmsConfig, Envelope};
pub use query::FetchQuery;
