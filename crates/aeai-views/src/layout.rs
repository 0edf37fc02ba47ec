//! Page shell: document head, header navigation, and footer.
//!
//! Every page view is wrapped by [`shell`], which produces a complete HTML
//! document with the fixed site chrome around the page content.

use maud::{DOCTYPE, Markup, html};

/// Site version baked into generated HTML as `<meta name="generator">`.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Site name used in document titles and the footer.
pub const SITE_NAME: &str = "Applied Economics AI";

/// Primary navigation links, in header order.
const NAV_LINKS: [(&str, &str); 5] = [
    ("About", "/about"),
    ("Services", "/services"),
    ("Research", "/research"),
    ("Data", "/data"),
    ("Lab", "/lab"),
];

/// Wrap page content in the full document shell.
pub fn shell(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="generator" content=(format!("aeai-site v{VERSION}"));
                title { (title) " — " (SITE_NAME) }
                link rel="stylesheet" href="/assets/style.css";
            }
            body {
                (header_nav())
                main { (content) }
                (footer())
            }
        }
    }
}

fn header_nav() -> Markup {
    html! {
        header class="site-header" {
            nav class="site-nav" aria-label="Primary" {
                a class="brand" href="/" { (SITE_NAME) }
                ul class="nav-links" {
                    @for (name, href) in NAV_LINKS {
                        li { a href=(href) { (name) } }
                    }
                }
                a class="btn btn-outline nav-cta" href="/contact" { "Get in Touch" }
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer class="site-footer" {
            div class="footer-grid" {
                div class="footer-brand" {
                    p class="brand" { (SITE_NAME) }
                    p class="footer-tagline" {
                        "Economic intelligence built on evidence."
                    }
                }
                div class="footer-col" {
                    h3 { "Company" }
                    ul {
                        li { a href="/about" { "About" } }
                        li { a href="/careers" { "Careers" } }
                        li { a href="/contact" { "Contact" } }
                    }
                }
                div class="footer-col" {
                    h3 { "Work" }
                    ul {
                        li { a href="/services" { "Services" } }
                        li { a href="/industries" { "Industries" } }
                        li { a href="/research" { "Research" } }
                        li { a href="/data" { "Data" } }
                        li { a href="/insights" { "Insights" } }
                        li { a href="/lab" { "Lab" } }
                    }
                }
                div class="footer-col" {
                    h3 { "Contact" }
                    ul {
                        li {
                            a href="mailto:team@appliedeconomics.ai" {
                                "team@appliedeconomics.ai"
                            }
                        }
                        li { "London, United Kingdom" }
                    }
                }
            }
            p class="footer-copyright" { "© " (SITE_NAME) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_is_complete_document() {
        let page = shell("Research", html! { h1 { "Papers" } }).into_string();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Research — Applied Economics AI</title>"));
        assert!(page.contains("<h1>Papers</h1>"));
        assert!(page.contains("/assets/style.css"));
    }

    #[test]
    fn test_shell_has_nav_and_footer() {
        let page = shell("Home", html! {}).into_string();
        for (_, href) in NAV_LINKS {
            assert!(page.contains(&format!("href=\"{href}\"")), "missing {href}");
        }
        assert!(page.contains("Get in Touch"));
        assert!(page.contains("© Applied Economics AI"));
    }

    #[test]
    fn test_generator_meta_carries_version() {
        let page = shell("X", html! {}).into_string();
        assert!(page.contains("aeai-site v"));
    }
}
