//! Careers index and job detail pages.

use aeai_core::model::{CtaLink, HeroCopy, Job, JobDetail};
use maud::{Markup, PreEscaped, html};

use crate::components::{badge, cta_band, hero};
use crate::layout::shell;

/// Render the careers index.
pub fn careers_index(page_hero: &HeroCopy, jobs: &[Job]) -> Markup {
    let content = html! {
        (hero(page_hero))

        section class="section" {
            div class="container" {
                h2 class="section-header" { "Open Positions" }
                @if jobs.is_empty() {
                    p class="empty-note" { "No open positions at this time. Check back soon!" }
                } @else {
                    div class="card-stack" {
                        @for job in jobs {
                            a class="card card-link job-row" href=(format!("/careers/{}", job.slug)) {
                                div {
                                    div class="card-meta" {
                                        (badge(job.kind.label(), job.kind.badge_class()))
                                        @if let Some(department) = &job.department {
                                            span class="meta" { (department) }
                                        }
                                    }
                                    h3 { (job.title) }
                                    p class="meta" { (job.location) }
                                }
                                span class="explore" { "View position →" }
                            }
                        }
                    }
                }
            }
        }

        (cta_band(
            "Don't see the right role?",
            "We're always interested in hearing from talented people. Send us your resume.",
            Some(&CtaLink::new("Contact us", "/contact")),
            None,
            true,
        ))
    };
    shell("Careers", content)
}

/// Render a job detail page.
///
/// `description_html` and `requirements_html` are pre-rendered by the markup
/// crate.
pub fn job_detail(job: &JobDetail, description_html: &str, requirements_html: &str) -> Markup {
    let apply_href = job.apply_url.as_deref().unwrap_or("/contact");
    let content = html! {
        section class="hero hero-dark" {
            div class="container" {
                div class="card-meta" {
                    (badge(job.kind.label(), job.kind.badge_class()))
                    @if let Some(department) = &job.department {
                        span class="chip" { (department) }
                    }
                }
                h1 { (job.title) }
                p class="standfirst" { (job.location) }
                div class="cta-actions" {
                    a class="btn btn-primary" href=(apply_href) { "Apply Now" }
                }
            }
        }

        section class="content-block" {
            div class="container narrow" {
                h2 { "About the Role" }
                div class="prose" { (PreEscaped(description_html)) }
            }
        }

        @if !requirements_html.is_empty() {
            section class="section section-alt" {
                div class="container narrow" {
                    h2 class="section-header" { "Requirements" }
                    div class="prose" { (PreEscaped(requirements_html)) }
                }
            }
        }

        section class="section" {
            div class="container apply-row" {
                div {
                    h3 { "Ready to apply?" }
                    p { "Send us your resume and cover letter." }
                }
                a class="btn btn-primary" href=(apply_href) { "Apply Now" }
            }
        }

        section class="backlink" {
            div class="container" {
                a href="/careers" { "← Back to all positions" }
            }
        }

        (cta_band(
            "Have questions?",
            "Reach out to learn more about this position or our team.",
            Some(&CtaLink::new("Contact us", "/contact")),
            None,
            false,
        ))
    };
    shell(&job.title, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aeai_core::model::EmploymentType;

    #[test]
    fn test_empty_listing_shows_note() {
        let page = careers_index(&HeroCopy::new("Join Our Team", ""), &[]).into_string();
        assert!(page.contains("No open positions at this time"));
    }

    #[test]
    fn test_listing_renders_jobs_with_badges() {
        let jobs = vec![Job {
            title: "Data Analyst".into(),
            slug: "data-analyst".into(),
            location: "London".into(),
            kind: EmploymentType::FullTime,
            department: Some("Data Products".into()),
            featured: true,
        }];
        let page = careers_index(&HeroCopy::new("Join Our Team", ""), &jobs).into_string();
        assert!(page.contains("Full-time"));
        assert!(page.contains("/careers/data-analyst"));
        assert!(!page.contains("No open positions"));
    }

    #[test]
    fn test_job_detail_without_apply_url_routes_to_contact() {
        let job = JobDetail {
            title: "Economist".into(),
            location: "London".into(),
            kind: EmploymentType::FullTime,
            department: None,
            description: String::new(),
            requirements: String::new(),
            apply_url: None,
        };
        let page = job_detail(&job, "<p>Role.</p>", "").into_string();
        assert!(page.contains("href=\"/contact\""));
        assert!(!page.contains("Requirements"));
    }
}
