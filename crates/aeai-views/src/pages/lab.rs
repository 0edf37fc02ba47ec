//! Lab page and guide detail pages.

use aeai_core::model::{CtaLink, Guide, GuideDetail, HeroCopy, SectionCopy};
use aeai_markup::render_paragraphs;
use maud::{Markup, PreEscaped, html};

use crate::components::{content_block, cta_band};
use crate::layout::shell;

/// Render the lab page.
pub fn lab(
    hero: &HeroCopy,
    about: &SectionCopy,
    fellowship: &SectionCopy,
    fellowship_cta: &CtaLink,
    guides: &[Guide],
) -> Markup {
    let content = html! {
        section class="hero hero-dark hero-centered" {
            div class="container narrow" {
                p class="kicker" { "The AEAI Lab" }
                h1 { (hero.headline) }
                p class="standfirst" { (hero.subheadline) }
            }
        }

        (content_block(&about.title, &render_paragraphs(&about.content)))

        section class="section section-alt" {
            div class="container" {
                div class="section-head" {
                    h2 class="section-header" { "Methodological Guides" }
                    p class="section-lede" {
                        "Practical tutorials and reference materials for applied economists."
                    }
                }
                div class="card-grid" {
                    @for guide in guides.iter().take(4) {
                        a class="card card-link" href=(format!("/lab/guides/{}", guide.slug)) {
                            h3 { (guide.title) }
                            p { (guide.summary) }
                            span class="explore" { "Read →" }
                        }
                    }
                }
            }
        }

        section class="section" {
            div class="container narrow" {
                h2 class="section-header" { (fellowship.title) }
                div class="prose" { (PreEscaped(render_paragraphs(&fellowship.content))) }
                a class="btn btn-primary" href=(fellowship_cta.url) { (fellowship_cta.label) }
            }
        }

        (cta_band(
            "Want to contribute?",
            "We welcome contributions to our guides and open-source projects.",
            Some(&CtaLink::new("Get in touch", "/contact")),
            None,
            false,
        ))
    };
    shell("The AEAI Lab", content)
}

/// Render a guide detail page.
///
/// `body_html` is the guide body pre-rendered by the markup crate.
pub fn guide_detail(guide: &GuideDetail, body_html: &str) -> Markup {
    let content = html! {
        section class="hero hero-dark" {
            div class="container narrow" {
                p class="kicker" { "Lab Guide" }
                h1 { (guide.title) }
                p class="standfirst" { (guide.summary) }
                @if !guide.authors.is_empty() {
                    p class="authors" { "By " (guide.authors.join(", ")) }
                }
            }
        }

        section class="article-body" {
            div class="container narrow" {
                article class="prose" { (PreEscaped(body_html)) }
            }
        }

        section class="backlink" {
            div class="container" {
                a href="/lab" { "← Back to Lab" }
            }
        }

        (cta_band(
            "Found this helpful?",
            "Check out our other guides and resources in the Economics Lab.",
            Some(&CtaLink::new("View all guides", "/lab")),
            None,
            false,
        ))
    };
    shell(&guide.title, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lab_shows_at_most_four_guides() {
        let guides: Vec<Guide> = (0..6)
            .map(|i| Guide {
                title: format!("Guide {i}"),
                slug: format!("guide-{i}"),
                summary: String::new(),
            })
            .collect();
        let page = lab(
            &HeroCopy::new("Lab", "sub"),
            &SectionCopy::new("About the Lab", "text"),
            &SectionCopy::new("Summer Fellowship", "text"),
            &CtaLink::new("Enquire", "/contact"),
            &guides,
        )
        .into_string();
        assert!(page.contains("Guide 3"));
        assert!(!page.contains("Guide 4"));
    }

    #[test]
    fn test_guide_detail_byline() {
        let detail = GuideDetail {
            title: "Causal Inference".into(),
            summary: "Methods.".into(),
            body: String::new(),
            authors: vec!["Dr. Emily Zhang".into(), "Dr. Robert Kim".into()],
        };
        let page = guide_detail(&detail, "<h1>Intro</h1>").into_string();
        assert!(page.contains("By Dr. Emily Zhang, Dr. Robert Kim"));
        assert!(page.contains("<h1>Intro</h1>"));
    }
}
