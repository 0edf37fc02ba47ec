//! Industries index and industry detail pages.

use aeai_core::model::{CtaLink, Industry};
use aeai_markup::render_paragraphs;
use maud::{Markup, html};

use crate::components::{content_block, cta_band, page_hero, related_link_cards, spec_tiles};
use crate::layout::shell;

/// Render the industries index.
pub fn industries_index(industries: &[Industry]) -> Markup {
    let content = html! {
        (page_hero(
            "Industries",
            "Sector expertise, economic depth",
            "We serve the institutions that shape economies — each with data and methods matched to their questions.",
        ))

        section class="section" {
            div class="container" {
                div class="card-grid" {
                    @for industry in industries {
                        a class="card card-link" href=(format!("/industries/{}", industry.slug)) {
                            h3 { (industry.name) }
                            p { (industry.description) }
                            span class="explore" { "Explore →" }
                        }
                    }
                }
            }
        }

        (cta_band(
            "Don't see your sector?",
            "Our methods travel. Tell us about your question and we will outline an approach.",
            Some(&CtaLink::new("Get in touch", "/contact")),
            None,
            false,
        ))
    };
    shell("Industries", content)
}

/// Render an industry detail page.
pub fn industry_detail(industry: &Industry) -> Markup {
    let content = html! {
        section class="hero hero-dark" {
            div class="container" {
                p class="kicker" { (industry.name) }
                h1 { (industry.headline) }
                p class="standfirst" { (industry.description) }
                div class="cta-actions" {
                    a class="btn btn-primary" href="/contact" { "Discuss a Project" }
                }
            }
        }

        section class="section" {
            div class="container" {
                h2 class="section-header" { "At a Glance" }
                (spec_tiles(&industry.specs))
            }
        }

        (content_block("How We Help", &render_paragraphs(&industry.how_we_help)))

        @if !industry.related_services.is_empty() || !industry.related_data.is_empty() {
            section class="section" {
                div class="container split" {
                    @if !industry.related_services.is_empty() {
                        (related_link_cards("Related Services", &industry.related_services, "/services"))
                    }
                    @if !industry.related_data.is_empty() {
                        (related_link_cards("Related Data Products", &industry.related_data, "/data"))
                    }
                }
            }
        }

        section class="backlink" {
            div class="container" {
                a href="/industries" { "← Back to all industries" }
            }
        }

        (cta_band(
            &industry.cta_headline,
            &industry.cta_description,
            Some(&CtaLink::new("Get in touch", "/contact")),
            None,
            false,
        ))
    };
    shell(&industry.name, content)
}
