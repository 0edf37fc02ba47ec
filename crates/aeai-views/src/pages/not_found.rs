//! 404 page.

use maud::{Markup, html};

use crate::layout::shell;

/// Render the not-found page.
pub fn not_found() -> Markup {
    let content = html! {
        section class="hero hero-centered" {
            div class="container narrow" {
                p class="kicker" { "404" }
                h1 { "Page not found" }
                p class="standfirst" {
                    "The page you are looking for does not exist or has moved."
                }
                div class="cta-actions" {
                    a class="btn btn-primary" href="/" { "Back to home" }
                }
            }
        }
    };
    shell("Not Found", content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_links_home() {
        let page = not_found().into_string();
        assert!(page.contains("Page not found"));
        assert!(page.contains("href=\"/\""));
    }
}
