//! Insights: articles and announcements published by the firm.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A tag grouping insights by theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
}

impl Topic {
    /// Construct a topic.
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
        }
    }
}

/// An article author.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    /// Full name.
    pub name: String,
    /// Role within the firm.
    pub title: String,
    /// Short biography.
    pub bio: String,
    /// URL slug.
    pub slug: String,
    /// Portrait image path, when one exists.
    pub photo_url: Option<String>,
}

/// An insight article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    /// Article title.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// Standfirst shown in listings and under the title.
    pub excerpt: String,
    /// Publication date.
    pub published_at: NaiveDate,
    /// Estimated reading time in minutes.
    pub read_time: u32,
    /// Whether the article is featured on the home page.
    pub featured: bool,
    /// Topics the article belongs to.
    pub topics: Vec<Topic>,
    /// Article authors.
    pub authors: Vec<Author>,
    /// Article body in the line-oriented markup format.
    pub body: String,
}

impl Insight {
    /// Number of topics shared with another article.
    ///
    /// Used to rank related articles: overlap first, recency second.
    pub fn topic_overlap(&self, other: &Insight) -> usize {
        self.topics
            .iter()
            .filter(|t| other.topics.iter().any(|o| o.slug == t.slug))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insight(slug: &str, topics: &[(&str, &str)]) -> Insight {
        Insight {
            title: slug.to_string(),
            slug: slug.to_string(),
            excerpt: String::new(),
            published_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            read_time: 5,
            featured: false,
            topics: topics.iter().map(|(n, s)| Topic::new(*n, *s)).collect(),
            authors: vec![],
            body: String::new(),
        }
    }

    #[test]
    fn test_topic_overlap() {
        let a = insight("a", &[("AI & Policy", "ai-policy"), ("Government", "government")]);
        let b = insight("b", &[("Government", "government")]);
        let c = insight("c", &[("Migration", "migration")]);

        assert_eq!(a.topic_overlap(&b), 1);
        assert_eq!(a.topic_overlap(&c), 0);
        assert_eq!(a.topic_overlap(&a), 2);
    }
}
