//! Home page: hero, services overview, data products, industries, insights.

use aeai_core::model::{CtaLink, Dataset, HeroCopy, Industry, Insight, Service};
use aeai_core::util::format_date_long;
use maud::{Markup, html};

use crate::components::cta_band;
use crate::layout::shell;

/// Render the home page.
pub fn home(
    hero: &HeroCopy,
    services: &[Service],
    datasets: &[Dataset],
    industries: &[Industry],
    insights: &[Insight],
) -> Markup {
    let content = html! {
        section class="hero hero-home" {
            div class="container" {
                h1 { (hero.headline) }
                p class="standfirst" { (hero.subheadline) }
                div class="cta-actions" {
                    a class="btn btn-primary" href="/services" { "Our Services" }
                    a class="btn btn-primary" href="/data" { "Explore Our Data" }
                }
            }
        }

        section class="section" {
            div class="container" {
                h2 class="section-header" { "What We Do" }
                div class="card-grid" {
                    @for (index, service) in services.iter().enumerate() {
                        a class="card card-link" href=(format!("/services/{}", service.slug)) {
                            span class="card-number" { (format!("{:02}", index + 1)) }
                            h3 { (service.title) }
                            p { (service.summary) }
                            span class="explore" { "Explore →" }
                        }
                    }
                }
            }
        }

        section class="section section-alt" {
            div class="container" {
                div class="section-head" {
                    h2 class="section-header" { "Data Products" }
                    a class="link-specs" href="/data" { "View All" }
                }
                div class="card-grid" {
                    @for dataset in datasets {
                        a class="card card-link" href=(format!("/data/{}", dataset.slug)) {
                            h3 { (dataset.title) }
                            p { (dataset.description) }
                            span class="explore" { "Explore →" }
                        }
                    }
                }
            }
        }

        section class="section" {
            div class="container" {
                div class="section-head" {
                    h2 class="section-header" { "Industries" }
                    a class="link-specs" href="/industries" { "View All" }
                }
                div class="tile-grid" {
                    @for industry in industries {
                        a class="card card-link tile" href=(format!("/industries/{}", industry.slug)) {
                            h3 { (industry.name) }
                            span class="explore" { "Explore →" }
                        }
                    }
                }
            }
        }

        section class="section section-alt" {
            div class="container" {
                div class="section-head" {
                    h2 class="section-header" { "Latest Insights" }
                    a class="link-specs" href="/insights" { "View All" }
                }
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

        (cta_band(
            "Every project starts with a conversation",
            "Tell us about your challenge. We will outline how our team, methods, and data can help.",
            Some(&CtaLink::new("Get in touch", "/contact")),
            None,
            true,
        ))
    };
    shell("Economic Intelligence Built on Evidence", content)
}
