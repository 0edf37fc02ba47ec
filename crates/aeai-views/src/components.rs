//! Reusable section components: heroes, CTA bands, stat grids, card pieces.
//!
//! Each component renders supplied content props and nothing else; pages
//! decide what data flows in.

use aeai_core::model::{
    Capability, Challenge, CtaLink, EngagementHighlight, HeroCopy, MethodStep, RelatedLink, Spec,
    Stat,
};
use maud::{Markup, PreEscaped, html};

/// Standard light hero: headline and standfirst.
pub fn hero(copy: &HeroCopy) -> Markup {
    html! {
        section class="hero" {
            div class="container" {
                h1 { (copy.headline) }
                @if !copy.subheadline.is_empty() {
                    p class="standfirst" { (copy.subheadline) }
                }
            }
        }
    }
}

/// Editorial hero with an upper-case kicker line, used by index pages.
pub fn page_hero(kicker: &str, headline: &str, standfirst: &str) -> Markup {
    html! {
        section class="hero hero-editorial" {
            div class="container" {
                p class="kicker" { (kicker) }
                h1 { (headline) }
                @if !standfirst.is_empty() {
                    p class="standfirst" { (standfirst) }
                }
            }
        }
    }
}

/// Closing call-to-action band.
pub fn cta_band(
    headline: &str,
    subheadline: &str,
    primary: Option<&CtaLink>,
    secondary: Option<&CtaLink>,
    dark: bool,
) -> Markup {
    let class = if dark { "cta-band cta-dark" } else { "cta-band" };
    html! {
        section class=(class) {
            div class="container cta-inner" {
                div {
                    h2 { (headline) }
                    @if !subheadline.is_empty() {
                        p { (subheadline) }
                    }
                }
                div class="cta-actions" {
                    @if let Some(cta) = primary {
                        a class="btn btn-primary" href=(cta.url) { (cta.label) }
                    }
                    @if let Some(cta) = secondary {
                        a class="btn btn-ghost" href=(cta.url) { (cta.label) }
                    }
                }
            }
        }
    }
}

/// Grid of labelled statistics.
pub fn stat_grid(stats: &[Stat]) -> Markup {
    html! {
        section class="stat-grid" {
            div class="container stats" {
                @for stat in stats {
                    div class="stat" {
                        span class="stat-value" { (stat.value) }
                        span class="stat-label" { (stat.label) }
                    }
                }
            }
        }
    }
}

/// Grid of specification tiles ("at a glance", data specifications).
pub fn spec_tiles(specs: &[Spec]) -> Markup {
    html! {
        div class="spec-tiles" {
            @for spec in specs {
                div class="spec-tile" {
                    h3 class="label" { (spec.label) }
                    p class="spec-value" { (spec.value) }
                }
            }
        }
    }
}

/// Small status/type badge.
pub fn badge(label: &str, class: &str) -> Markup {
    html! { span class=(class) { (label) } }
}

/// Titled prose section. `body_html` is pre-rendered markup.
pub fn content_block(title: &str, body_html: &str) -> Markup {
    html! {
        section class="content-block" {
            div class="container narrow" {
                h2 { (title) }
                div class="prose" { (PreEscaped(body_html)) }
            }
        }
    }
}

/// Numbered challenge list for service pages.
pub fn numbered_challenges(challenges: &[Challenge]) -> Markup {
    html! {
        ol class="challenges" {
            @for (index, challenge) in challenges.iter().enumerate() {
                li class="challenge" {
                    span class="challenge-number" { (format!("{:02}", index + 1)) }
                    div {
                        h3 { (challenge.title) }
                        p { (challenge.description) }
                    }
                }
            }
        }
    }
}

/// Methodology timeline for service pages; the core step is highlighted.
pub fn methodology_steps(steps: &[MethodStep]) -> Markup {
    html! {
        ol class="method-steps" {
            @for step in steps {
                li class=(if step.is_core { "method-step core" } else { "method-step" }) {
                    h3 { (step.title) }
                    p { (step.description) }
                }
            }
        }
    }
}

/// Capability cards for service pages.
pub fn capability_grid(capabilities: &[Capability]) -> Markup {
    html! {
        div class="card-grid" {
            @for capability in capabilities {
                div class="card" {
                    h3 { (capability.title) }
                    p { (capability.description) }
                    p class="deliverables" {
                        span class="label" { "Deliverables: " }
                        (capability.deliverables)
                    }
                }
            }
        }
    }
}

/// Showcased engagement with headline metrics.
pub fn engagement_highlight(highlight: &EngagementHighlight) -> Markup {
    html! {
        div class="engagement-highlight" {
            h2 { (highlight.title) }
            p { (highlight.description) }
            div class="metrics" {
                @for metric in &highlight.metrics {
                    div class="stat" {
                        span class="stat-value" { (metric.value) }
                        span class="stat-label" { (metric.label) }
                    }
                }
            }
        }
    }
}

/// Cross-service navigation: every service line except the current one.
pub fn cross_service_nav(services: &[RelatedLink], current_slug: &str) -> Markup {
    html! {
        nav class="cross-service" aria-label="Other services" {
            h2 class="label" { "Other Services" }
            ul {
                @for service in services {
                    @if service.slug != current_slug {
                        li {
                            a href=(format!("/services/{}", service.slug)) { (service.name) }
                        }
                    }
                }
            }
        }
    }
}

/// Card list of related links under a title.
pub fn related_link_cards(title: &str, links: &[RelatedLink], base_path: &str) -> Markup {
    html! {
        div class="related-links" {
            h2 { (title) }
            div class="card-stack" {
                @for link in links {
                    a class="card card-link" href=(format!("{base_path}/{}", link.slug)) {
                        h3 { (link.name) }
                        span class="explore" { "Explore →" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_renders_copy() {
        let markup = hero(&HeroCopy::new("Join Our Team", "Work with us.")).into_string();
        assert!(markup.contains("<h1>Join Our Team</h1>"));
        assert!(markup.contains("Work with us."));
    }

    #[test]
    fn test_hero_escapes_content() {
        let markup = hero(&HeroCopy::new("<script>", "")).into_string();
        assert!(markup.contains("&lt;script&gt;"));
        assert!(!markup.contains("<script>"));
    }

    #[test]
    fn test_cta_band_variants() {
        let primary = CtaLink::new("Contact us", "/contact");
        let dark = cta_band("Questions?", "", Some(&primary), None, true).into_string();
        assert!(dark.contains("cta-dark"));
        assert!(dark.contains("href=\"/contact\""));

        let light = cta_band("Questions?", "", None, None, false).into_string();
        assert!(!light.contains("cta-dark"));
        assert!(!light.contains("btn-primary"));
    }

    #[test]
    fn test_numbered_challenges_zero_pads() {
        let challenges = vec![
            Challenge { title: "A".into(), description: "a".into() },
            Challenge { title: "B".into(), description: "b".into() },
        ];
        let markup = numbered_challenges(&challenges).into_string();
        assert!(markup.contains("01"));
        assert!(markup.contains("02"));
    }

    #[test]
    fn test_methodology_core_step_highlighted() {
        let steps = vec![
            MethodStep { title: "Scoping".into(), description: "d".into(), is_core: false },
            MethodStep { title: "Analysis".into(), description: "d".into(), is_core: true },
        ];
        let markup = methodology_steps(&steps).into_string();
        assert_eq!(markup.matches("method-step core").count(), 1);
    }

    #[test]
    fn test_cross_service_nav_excludes_current() {
        let services = vec![
            RelatedLink::new("Economic Consulting", "economic-consulting"),
            RelatedLink::new("Policy Analysis", "policy-analysis"),
        ];
        let markup = cross_service_nav(&services, "policy-analysis").into_string();
        assert!(markup.contains("economic-consulting"));
        assert!(!markup.contains("Policy Analysis"));
    }

    #[test]
    fn test_content_block_injects_prerendered_html() {
        let markup = content_block("Our Story", "<p>Founded in 2022.</p>").into_string();
        assert!(markup.contains("<p>Founded in 2022.</p>"));
    }
}
