//! Query builder for CMS content requests.
//!
//! Produces the query-string pairs the content API understands: `populate`,
//! `filters[field][op]`, `sort`, and `pagination[...]` parameters.

/// Builder for the query parameters of a content request.
///
/// # Example
///
/// ```
/// use aeai_cms::FetchQuery;
///
/// let query = FetchQuery::new()
///     .populate_all()
///     .filter_eq("slug", "data-analyst");
/// let pairs = query.into_pairs();
/// assert!(pairs.contains(&("populate".into(), "*".into())));
/// assert!(pairs.contains(&("filters[slug][$eq]".into(), "data-analyst".into())));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FetchQuery {
    pairs: Vec<(String, String)>,
}

impl FetchQuery {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate every relation (`populate=*`).
    pub fn populate_all(self) -> Self {
        self.push("populate", "*")
    }

    /// Populate a specific relation; repeatable.
    pub fn populate(self, relation: impl Into<String>) -> Self {
        self.push("populate", relation)
    }

    /// Equality filter: `filters[{field}][$eq]={value}`.
    pub fn filter_eq(self, field: &str, value: impl Into<String>) -> Self {
        self.push(format!("filters[{field}][$eq]"), value)
    }

    /// Plain filter: `filters[{field}]={value}`.
    pub fn filter(self, field: &str, value: impl Into<String>) -> Self {
        self.push(format!("filters[{field}]"), value)
    }

    /// Sort expression, e.g. `publicationDate:desc`; repeatable.
    pub fn sort(self, expr: impl Into<String>) -> Self {
        self.push("sort", expr)
    }

    /// Page number (1-based).
    pub fn page(self, page: u32) -> Self {
        self.push("pagination[page]", page.to_string())
    }

    /// Page size.
    pub fn page_size(self, size: u32) -> Self {
        self.push("pagination[pageSize]", size.to_string())
    }

    /// Whether any parameter has been set.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Consume the builder, yielding the ordered key/value pairs.
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }

    fn push(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.pairs.push((key.into(), value.into()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query() {
        let q = FetchQuery::new();
        assert!(q.is_empty());
        assert!(q.into_pairs().is_empty());
    }

    #[test]
    fn test_populate_all() {
        let pairs = FetchQuery::new().populate_all().into_pairs();
        assert_eq!(pairs, vec![("populate".to_string(), "*".to_string())]);
    }

    #[test]
    fn test_repeated_populate() {
        let pairs = FetchQuery::new()
            .populate("authors")
            .populate("topics")
            .into_pairs();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].1, "authors");
        assert_eq!(pairs[1].1, "topics");
    }

    #[test]
    fn test_filters() {
        let pairs = FetchQuery::new()
            .filter_eq("slug", "aipnet")
            .filter("featured", "true")
            .into_pairs();
        assert_eq!(pairs[0].0, "filters[slug][$eq]");
        assert_eq!(pairs[1].0, "filters[featured]");
    }

    #[test]
    fn test_sort_and_pagination() {
        let pairs = FetchQuery::new()
            .sort("publicationDate:desc")
            .page(2)
            .page_size(25)
            .into_pairs();
        assert_eq!(
            pairs,
            vec![
                ("sort".to_string(), "publicationDate:desc".to_string()),
                ("pagination[page]".to_string(), "2".to_string()),
                ("pagination[pageSize]".to_string(), "25".to_string()),
            ]
        );
    }

    #[test]
    fn test_pair_order_is_insertion_order() {
        let pairs = FetchQuery::new()
            .populate_all()
            .sort("order:asc")
            .into_pairs();
        assert_eq!(pairs[0].0, "populate");
        assert_eq!(pairs[1].0, "sort");
    }
}
