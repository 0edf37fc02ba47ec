//! About page: manifesto hero, team bios, stats, story and mission sections.

use aeai_core::model::{CtaLink, HeroCopy, SectionCopy, Stat, TeamMember};
use aeai_markup::render_paragraphs;
use maud::{Markup, html};

use crate::components::{content_block, cta_band, stat_grid};
use crate::layout::shell;

/// Render the about page.
pub fn about(
    hero: &HeroCopy,
    team: &[TeamMember],
    stats: &[Stat],
    story: &SectionCopy,
    mission: &SectionCopy,
    approach: &SectionCopy,
) -> Markup {
    let content = html! {
        section class="hero hero-centered" {
            div class="container narrow" {
                p class="kicker" { "About" }
                h1 { (hero.headline) }
                p class="standfirst" { (hero.subheadline) }
            }
        }

        section class="section" {
            div class="container" {
                h2 class="section-header" { "Our Team" }
                div class="team-list" {
                    @for member in team {
                        article class="team-member" {
                            div class="team-side" {
                                img src=(member.photo_url)
                                    alt=(format!("{}, {}", member.name, member.title));
                                h3 { (member.name) }
                                p class="role" { (member.title) }
                                div class="affiliations" {
                                    @for affiliation in &member.affiliations {
                                        span class="chip" { (affiliation) }
                                    }
                                }
                            }
                            div class="team-main" {
                                p class="bio" { (member.bio) }
                                h4 class="label" { "Selected Research" }
                                ul class="ruled-list" {
                                    @for work in &member.selected_work {
                                        li { (work) }
                                    }
                                }
                                h4 class="label" { "Selected Presentations" }
                                ul class="ruled-list" {
                                    @for presentation in &member.selected_presentations {
                                        li { (presentation) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        (stat_grid(stats))
        (content_block(&story.title, &render_paragraphs(&story.content)))
        (content_block(&mission.title, &render_paragraphs(&mission.content)))
        (content_block(&approach.title, &render_paragraphs(&approach.content)))

        (cta_band(
            "Get in touch",
            "Tell us about your challenge. We'll outline how our team, methods, and data can help.",
            Some(&CtaLink::new("Discuss a project", "/contact")),
            None,
            true,
        ))
    };
    shell("About", content)
}
