//! Services index and service detail pages.

use aeai_core::model::{CtaLink, RelatedLink, Service, Spec};
use maud::{Markup, html};

use crate::components::{
    capability_grid, cross_service_nav, cta_band, engagement_highlight, numbered_challenges,
    methodology_steps, page_hero, spec_tiles,
};
use crate::layout::shell;

/// Render the services index.
pub fn services_index(
    services: &[Service],
    client_segments: &[(String, String)],
    engagement_specs: &[Spec],
) -> Markup {
    let content = html! {
        (page_hero(
            "Services",
            "Rigour your next decision can stand on",
            "Board-level economic consulting, AI-built datasets, policy analysis, and training — delivered by PhD economists working with frontier AI.",
        ))

        section class="section" {
            div class="container" {
                div class="card-grid" {
                    @for (index, service) in services.iter().enumerate() {
                        a class="card card-link" href=(format!("/services/{}", service.slug)) {
                            span class="card-number" { (format!("{:02}", index + 1)) }
                            h3 { (service.title) }
                            p { (service.summary) }
                            p class="proof-point" { (service.proof_point) }
                            span class="explore" { "Explore →" }
                        }
                    }
                }
            }
        }

        section class="section section-alt" {
            div class="container" {
                h2 class="section-header" { "Who We Work With" }
                div class="tile-grid" {
                    @for (name, examples) in client_segments {
                        div class="card tile" {
                            h3 { (name) }
                            p { (examples) }
                        }
                    }
                }
            }
        }

        section class="section" {
            div class="container" {
                h2 class="section-header" { "How Engagements Run" }
                (spec_tiles(engagement_specs))
            }
        }

        (cta_band(
            "Not sure which service fits?",
            "Describe the question you are trying to answer. We will point you to the right starting place.",
            Some(&CtaLink::new("Discuss a Project", "/contact")),
            None,
            false,
        ))
    };
    shell("Services", content)
}

/// Render a service detail page.
pub fn service_detail(service: &Service, all_services: &[RelatedLink]) -> Markup {
    let content = html! {
        section class="hero hero-editorial" {
            div class="container" {
                nav class="breadcrumb" aria-label="Breadcrumb" {
                    a href="/services" { "Services" }
                    span { " / " (service.title) }
                }
                p class="kicker" { "Service" }
                h1 { (service.headline) }
                p class="standfirst" { (service.introduction) }
                div class="cta-actions" {
                    a class="btn btn-primary" href="/contact" { "Discuss a Project" }
                    a class="btn btn-outline" href="/data" { "View Our Data" }
                }
                (spec_tiles(&service.key_specs))
            }
        }

        section class="section section-alt" {
            div class="container" {
                h2 class="section-header" { "The Challenge" }
                (numbered_challenges(&service.challenges))
            }
        }

        section class="section" {
            div class="container" {
                h2 class="section-header" { "Our Approach" }
                (methodology_steps(&service.methodology))
            }
        }

        section class="section section-alt" {
            div class="container" {
                h2 class="section-header" { "Capabilities" }
                (capability_grid(&service.capabilities))
            }
        }

        section class="section" {
            div class="container" {
                (engagement_highlight(&service.engagement_highlight))
            }
        }

        @if !service.related_data_products.is_empty() {
            section class="section section-alt" {
                div class="container" {
                    div class="section-head" {
                        h2 class="section-header" { "Related Data Products" }
                        a class="link-specs" href="/data" { "View All Data" }
                    }
                    div class="card-grid" {
                        @for product in &service.related_data_products {
                            a class="card card-link" href=(format!("/data/{}", product.slug)) {
                                h3 { (product.name) }
                                p { (product.description) }
                                span class="explore" { "Explore →" }
                            }
                        }
                    }
                }
            }
        }

        section class="section" {
            div class="container" {
                (cross_service_nav(all_services, &service.slug))
            }
        }

        (cta_band(
            &service.cta_headline,
            &service.cta_description,
            Some(&CtaLink::new("Discuss a Project", "/contact")),
            None,
            false,
        ))
    };
    shell(&service.title, content)
}
