//! Request handlers: fetch CMS content, substitute fallbacks, render views.
//!
//! Every handler applies the same catch-and-fallback policy: any CMS failure
//! or empty payload is logged at `warn` and replaced with the hardcoded
//! content from `aeai-content`, so a page always renders. Errors are never
//! surfaced to the visitor.

pub mod about;
pub mod careers;
pub mod contact;
pub mod data;
pub mod home;
pub mod industries;
pub mod insights;
pub mod lab;
pub mod research;
pub mod services;

use aeai_core::Result;
use axum::http::StatusCode;
use maud::Markup;

/// Convert a fetched collection, falling back when the fetch failed or the
/// collection came back empty.
pub(crate) fn collection_or<R, T>(
    result: Result<Vec<R>>,
    convert: impl Fn(R) -> T,
    fallback: impl FnOnce() -> Vec<T>,
    what: &str,
) -> Vec<T> {
    match result {
        Ok(records) if !records.is_empty() => records.into_iter().map(convert).collect(),
        Ok(_) => {
            tracing::debug!(content = what, "CMS returned no entries; using fallback");
            fallback()
        }
        Err(err) => {
            tracing::warn!(content = what, error = %err, "CMS unavailable; using fallback");
            fallback()
        }
    }
}

/// Convert a fetched detail record, falling back when the fetch failed or
/// the slug is unknown to the CMS.
pub(crate) fn detail_or<R, T>(
    result: Result<Option<R>>,
    convert: impl FnOnce(R) -> T,
    fallback: impl FnOnce() -> T,
    what: &str,
) -> T {
    match result {
        Ok(Some(record)) => convert(record),
        Ok(None) => {
            tracing::debug!(content = what, "CMS has no entry; using fallback");
            fallback()
        }
        Err(err) => {
            tracing::warn!(content = what, error = %err, "CMS unavailable; using fallback");
            fallback()
        }
    }
}

/// Log a singleton fetch failure and return `None`, letting each page
/// section fall back independently.
pub(crate) fn singleton_or_none<R>(result: Result<Option<R>>, what: &str) -> Option<R> {
    match result {
        Ok(page) => page,
        Err(err) => {
            tracing::warn!(content = what, error = %err, "CMS unavailable; using fallback");
            None
        }
    }
}

/// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}

/// Fallback handler for unknown routes.
pub async fn not_found() -> (StatusCode, Markup) {
    (StatusCode::NOT_FOUND, aeai_views::pages::not_found())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aeai_core::Error;

    #[test]
    fn test_collection_or_uses_cms_data() {
        let result: Result<Vec<u32>> = Ok(vec![1, 2]);
        let out = collection_or(result, |n| n * 10, || vec![99], "test");
        assert_eq!(out, vec![10, 20]);
    }

    #[test]
    fn test_collection_or_empty_falls_back() {
        let result: Result<Vec<u32>> = Ok(vec![]);
        let out = collection_or(result, |n| n, || vec![99], "test");
        assert_eq!(out, vec![99]);
    }

    #[test]
    fn test_collection_or_error_falls_back() {
        let result: Result<Vec<u32>> = Err(Error::cms("down"));
        let out = collection_or(result, |n| n, || vec![99], "test");
        assert_eq!(out, vec![99]);
    }

    #[test]
    fn test_detail_or_paths() {
        let hit: Result<Option<u32>> = Ok(Some(5));
        assert_eq!(detail_or(hit, |n| n + 1, || 0, "t"), 6);

        let miss: Result<Option<u32>> = Ok(None);
        assert_eq!(detail_or(miss, |n| n + 1, || 0, "t"), 0);

        let err: Result<Option<u32>> = Err(Error::cms("down"));
        assert_eq!(detail_or(err, |n| n + 1, || 0, "t"), 0);
    }

    #[test]
    fn test_singleton_or_none_swallows_errors() {
        let err: Result<Option<u32>> = Err(Error::cms("down"));
        assert!(singleton_or_none(err, "t").is_none());
        let hit: Result<Option<u32>> = Ok(Some(1));
        assert_eq!(singleton_or_none(hit, "t"), Some(1));
    }
}
