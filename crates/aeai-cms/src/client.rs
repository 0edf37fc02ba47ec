//! HTTP client for the headless CMS.
//!
//! One GET per content collection or singleton, returning the API's
//! `{ data, meta }` envelope. Any transport failure, non-2xx status, or
//! undecodable payload maps to [`Error::Cms`]; callers substitute fallback
//! content. There is deliberately no retry, no backoff, and no caching.

use std::time::Duration;

use aeai_core::{Error, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::query::FetchQuery;
use crate::records::{
    AboutPageRecord, CareersPageRecord, DatasetRecord, GuideRecord, JobRecord, LabPageRecord,
    PaperRecord,
};

/// Connection settings for the CMS.
#[derive(Debug, Clone)]
pub struct CmsConfig {
    /// Base URL of the CMS, e.g. `http://localhost:1337`.
    pub base_url: String,
    /// Bearer token for authenticated reads, if required.
    pub api_token: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:1337".to_string(),
            api_token: None,
            timeout_secs: 10,
        }
    }
}

/// Response envelope returned by every content endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    /// Payload; `null` or absent when the entry does not exist.
    pub data: Option<T>,
    /// Pagination and bookkeeping metadata, passed through untyped.
    #[serde(default)]
    pub meta: serde_json::Value,
}

/// Client for the CMS content API.
#[derive(Debug, Clone)]
pub struct CmsClient {
    http: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl CmsClient {
    /// Build a client from connection settings.
    pub fn new(config: CmsConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::cms_with_source("failed to build HTTP client", e))?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token,
        })
    }

    /// Base fetch: `GET {base}/api{endpoint}?{query}`.
    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: FetchQuery,
    ) -> Result<Envelope<T>> {
        let url = format!("{}/api{}", self.base_url, endpoint);
        tracing::debug!(endpoint, "fetching CMS content");

        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(&query.into_pairs());
        }
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::cms_with_source(format!("request to {endpoint} failed"), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::cms(format!("{endpoint} returned {status}")));
        }

        response
            .json::<Envelope<T>>()
            .await
            .map_err(|e| Error::cms_with_source(format!("invalid payload from {endpoint}"), e))
    }

    /// Fetch a collection, treating a `null` data field as an empty list.
    async fn fetch_collection<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: FetchQuery,
    ) -> Result<Vec<T>> {
        let envelope = self.fetch::<Vec<T>>(endpoint, query).await?;
        Ok(envelope.data.unwrap_or_default())
    }

    /// Fetch the first entry of a slug-filtered collection.
    async fn fetch_by_slug<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        slug: &str,
    ) -> Result<Option<T>> {
        let query = FetchQuery::new().filter_eq("slug", slug).populate_all();
        let mut entries = self.fetch_collection::<T>(endpoint, query).await?;
        if entries.is_empty() {
            Ok(None)
        } else {
            Ok(Some(entries.remove(0)))
        }
    }

    // ------------------------------------------------------------------------
    // Collections
    // ------------------------------------------------------------------------

    /// All job postings.
    pub async fn jobs(&self) -> Result<Vec<JobRecord>> {
        self.fetch_collection("/jobs", FetchQuery::new().populate_all())
            .await
    }

    /// A job posting by slug.
    pub async fn job_by_slug(&self, slug: &str) -> Result<Option<JobRecord>> {
        self.fetch_by_slug("/jobs", slug).await
    }

    /// All datasets.
    pub async fn datasets(&self) -> Result<Vec<DatasetRecord>> {
        self.fetch_collection("/datasets", FetchQuery::new().populate_all())
            .await
    }

    /// A dataset by slug.
    pub async fn dataset_by_slug(&self, slug: &str) -> Result<Option<DatasetRecord>> {
        self.fetch_by_slug("/datasets", slug).await
    }

    /// All papers, newest first.
    pub async fn papers(&self) -> Result<Vec<PaperRecord>> {
        self.fetch_collection(
            "/papers",
            FetchQuery::new().populate_all().sort("publicationDate:desc"),
        )
        .await
    }

    /// A paper by slug.
    pub async fn paper_by_slug(&self, slug: &str) -> Result<Option<PaperRecord>> {
        self.fetch_by_slug("/papers", slug).await
    }

    /// All guides in page order.
    pub async fn guides(&self) -> Result<Vec<GuideRecord>> {
        self.fetch_collection("/guides", FetchQuery::new().populate_all().sort("order:asc"))
            .await
    }

    /// A guide by slug.
    pub async fn guide_by_slug(&self, slug: &str) -> Result<Option<GuideRecord>> {
        self.fetch_by_slug("/guides", slug).await
    }

    // ------------------------------------------------------------------------
    // Singletons
    // ------------------------------------------------------------------------

    /// The about-page singleton.
    pub async fn about_page(&self) -> Result<Option<AboutPageRecord>> {
        let envelope = self
            .fetch::<AboutPageRecord>("/about-page", FetchQuery::new().populate_all())
            .await?;
        Ok(envelope.data)
    }

    /// The careers-page singleton.
    pub async fn careers_page(&self) -> Result<Option<CareersPageRecord>> {
        let envelope = self
            .fetch::<CareersPageRecord>("/careers-page", FetchQuery::new().populate_all())
            .await?;
        Ok(envelope.data)
    }

    /// The lab-page singleton.
    pub async fn lab_page(&self) -> Result<Option<LabPageRecord>> {
        let envelope = self
            .fetch::<LabPageRecord>("/lab-page", FetchQuery::new().populate_all())
            .await?;
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CmsConfig::default();
        assert_eq!(config.base_url, "http://localhost:1337");
        assert!(config.api_token.is_none());
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = CmsClient::new(CmsConfig {
            base_url: "http://cms.example.org/".into(),
            ..CmsConfig::default()
        })
        .unwrap();
        assert_eq!(client.base_url, "http://cms.example.org");
    }

    #[test]
    fn test_envelope_null_data() {
        let envelope: Envelope<Vec<JobRecord>> =
            serde_json::from_str(r#"{"data": null, "meta": {}}"#).unwrap();
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_envelope_missing_fields() {
        let envelope: Envelope<Vec<JobRecord>> = serde_json::from_str("{}").unwrap();
        assert!(envelope.data.is_none());
        assert!(envelope.meta.is_null());
    }
}
