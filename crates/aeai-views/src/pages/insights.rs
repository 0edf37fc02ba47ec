//! Insights index and article detail pages.

use aeai_core::model::Insight;
use aeai_core::util::format_date_long;
use maud::{Markup, PreEscaped, html};

use crate::layout::shell;

/// Render the insights index.
pub fn insights_index(insights: &[Insight]) -> Markup {
    let content = html! {
        section class="hero hero-editorial" {
            div class="container" {
                p class="kicker" { "Insights" }
                h1 { "Research news and data stories" }
                p class="standfirst" {
                    "Announcements, published columns, and analysis from the Applied Economics team."
                }
            }
        }

        section class="section" {
            div class="container" {
                div class="card-grid" {
                    @for insight in insights {
                        a class="card card-link" href=(format!("/insights/{}", insight.slug)) {
                            span class="meta" { (format_date_long(insight.published_at)) }
                            h3 { (insight.title) }
                            p { (insight.excerpt) }
                            span class="explore" { "Read →" }
                        }
                    }
                }
            }
        }
    };
    shell("Insights", content)
}

/// Render an article detail page.
///
/// `body_html` is the article body pre-rendered by the markup crate; it is
/// injected verbatim.
pub fn insight_detail(insight: &Insight, related: &[Insight], body_html: &str) -> Markup {
    let content = html! {
        article {
            section class="article-head" {
                div class="container narrow" {
                    (topic_tags(insight))
                    h1 { (insight.title) }
                    p class="standfirst" { (insight.excerpt) }
                    p class="meta" {
                        time datetime=(insight.published_at.to_string()) {
                            (format_date_long(insight.published_at).to_uppercase())
                        }
                        " · " (insight.read_time) " MIN READ"
                    }
                    hr;
                }
            }

            section class="article-body" {
                div class="container narrow" {
                    div class="prose" { (PreEscaped(body_html)) }
                }
            }

            section class="article-foot" {
                div class="container narrow" {
                    hr;
                    (topic_tags(insight))
                }
            }

            @if !related.is_empty() {
                section class="section section-alt" {
                    div class="container" {
                        div class="section-head" {
                            h2 class="section-header" { "Related Insights" }
                            a class="link-specs" href="/insights" { "View All" }
                        }
                        div class="card-grid" {
                            @for item in related {
                                a class="card card-link" href=(format!("/insights/{}", item.slug)) {
                                    span class="meta" { (format_date_long(item.published_at)) }
                                    h3 { (item.title) }
                                    p { (item.excerpt) }
                                    span class="explore" { "Explore →" }
                                }
                            }
                        }
                    }
                }
            }

            section class="section" {
                div class="container" {
                    div class="card cta-card" {
                        span class="label" { "Stay Informed" }
                        h2 { "Stay informed." }
                        p { "Receive our latest research and data insights." }
                        div class="cta-actions" {
                            a class="btn btn-primary" href="/contact" { "Subscribe to Updates" }
                            a class="btn btn-outline" href="/contact" { "Contact Us" }
                        }
                    }
                }
            }
        }
    };
    shell(&insight.title, content)
}

fn topic_tags(insight: &Insight) -> Markup {
    html! {
        ul class="topic-tags" {
            @for topic in &insight.topics {
                li class="chip" { (topic.name) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aeai_core::model::Topic;
    use chrono::NaiveDate;

    fn insight() -> Insight {
        Insight {
            title: "Expert Evidence".into(),
            slug: "parliamentary-evidence".into(),
            excerpt: "Findings on AI in government.".into(),
            published_at: NaiveDate::from_ymd_opt(2025, 2, 10).unwrap(),
            read_time: 8,
            featured: true,
            topics: vec![Topic::new("AI & Policy", "ai-policy")],
            authors: vec![],
            body: String::new(),
        }
    }

    #[test]
    fn test_article_head_metadata() {
        let page = insight_detail(&insight(), &[], "<p>Body here.</p>").into_string();
        assert!(page.contains("10 FEBRUARY 2025"));
        assert!(page.contains("8 MIN READ"));
        assert!(page.contains("AI &amp; Policy"));
        assert!(page.contains("<p>Body here.</p>"));
    }

    #[test]
    fn test_related_section_only_when_present() {
        let without = insight_detail(&insight(), &[], "").into_string();
        assert!(!without.contains("Related Insights"));

        let related = vec![insight()];
        let with = insight_detail(&insight(), &related, "").into_string();
        assert!(with.contains("Related Insights"));
    }
}
