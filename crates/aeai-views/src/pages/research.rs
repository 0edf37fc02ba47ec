//! Research index and paper detail pages.

use aeai_core::model::{CtaLink, Paper, PaperDetail};
use aeai_core::util::{format_date_us, format_month_year};
use aeai_markup::render_paragraphs;
use maud::{Markup, html};

use crate::components::{badge, content_block, cta_band, page_hero};
use crate::layout::shell;

/// Render the research index.
pub fn research_index(papers: &[Paper]) -> Markup {
    let content = html! {
        (page_hero(
            "Research",
            "Novel AI-driven methods to measure economic activity",
            "From global trade networks to labour markets, capital investment, and credit relationships — we build the measurement tools that economics has been missing.",
        ))

        section class="section" {
            div class="container" {
                div class="paper-list" {
                    @for paper in papers {
                        article class="paper" {
                            div class="card-meta" {
                                (badge(paper.status.label(), paper.status.badge_class()))
                                @if let Some(date) = paper.publication_date {
                                    span class="meta" { (format_month_year(date)) }
                                }
                                @if let Some(venue) = &paper.publication_venue {
                                    span class="meta" { "• " (venue) }
                                }
                            }
                            h2 {
                                a href=(format!("/research/{}", paper.slug)) { (paper.title) }
                            }
                            @if !paper.authors.is_empty() {
                                p class="authors" { (paper.authors.join(", ")) }
                            }
                            @if !paper.abstract_text.is_empty() {
                                p class="abstract" { (paper.abstract_excerpt(250)) }
                            }
                            a class="explore" href=(format!("/research/{}", paper.slug)) {
                                "Read more →"
                            }
                        }
                    }
                }
            }
        }

        (cta_band(
            "Interested in collaboration?",
            "We welcome research partnerships with academic institutions and policy organizations.",
            Some(&CtaLink::new("Contact us", "/contact")),
            None,
            false,
        ))
    };
    shell("Research", content)
}

/// Render a paper detail page.
pub fn paper_detail(paper: &PaperDetail) -> Markup {
    let content = html! {
        section class="hero hero-dark" {
            div class="container" {
                (badge(paper.status.label(), paper.status.badge_class()))
                h1 { (paper.title) }
                @if !paper.authors.is_empty() {
                    p class="authors" { (paper.authors.join(", ")) }
                }
                div class="card-meta" {
                    @if let Some(date) = paper.publication_date {
                        span class="meta" { (format_date_us(date)) }
                    }
                    @if let Some(venue) = &paper.publication_venue {
                        span class="meta" { "• " (venue) }
                    }
                }
                @if let Some(pdf) = &paper.pdf_link {
                    div class="cta-actions" {
                        a class="btn btn-primary" href=(pdf) target="_blank" rel="noopener noreferrer" {
                            "Download PDF"
                        }
                    }
                }
            }
        }

        (content_block("Abstract", &render_paragraphs(&paper.abstract_text)))

        @if !paper.key_findings.is_empty() {
            section class="section section-alt" {
                div class="container" {
                    h2 class="section-header" { "Key Findings" }
                    ol class="findings" {
                        @for finding in &paper.key_findings {
                            li { (finding) }
                        }
                    }
                }
            }
        }

        @if let Some(citation) = &paper.citation_apa {
            section class="section" {
                div class="container narrow" {
                    h2 class="section-header" { "Citation" }
                    div class="card citation" { code { (citation) } }
                }
            }
        }

        section class="backlink" {
            div class="container" {
                a href="/research" { "← Back to all research" }
            }
        }

        (cta_band(
            "Questions about this research?",
            "Contact us to discuss this paper or explore collaboration opportunities.",
            Some(&CtaLink::new("Contact us", "/contact")),
            None,
            false,
        ))
    };
    shell(&paper.title, content)
}
