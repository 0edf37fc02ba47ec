//! Contact page: form, contact details, and the post-submission view.

use maud::{Markup, html};

use crate::layout::shell;

/// Render the contact page with an empty form.
pub fn contact(inquiry_types: &[(String, String)]) -> Markup {
    contact_page(inquiry_types, false)
}

/// Render the contact page after a successful submission.
pub fn contact_submitted() -> Markup {
    contact_page(&[], true)
}

fn contact_page(inquiry_types: &[(String, String)], submitted: bool) -> Markup {
    let content = html! {
        section class="hero hero-editorial" {
            div class="container" {
                p class="kicker" { "Contact" }
                h1 { "Every project starts with a conversation" }
                p class="standfirst" {
                    "Tell us about your challenge. We will outline how our team, methods, and data can help."
                }
            }
        }

        section class="section section-alt" {
            div class="container split" {
                div class="contact-form-col" {
                    h2 class="section-header" { "Send us a message" }
                    @if submitted {
                        div class="card confirmation" {
                            h3 { "Message received" }
                            p { "We typically respond within 24 hours." }
                        }
                    } @else {
                        form method="post" action="/contact" class="contact-form" {
                            div class="form-row" {
                                div class="form-field" {
                                    label for="name" { "Name " span class="required" { "*" } }
                                    input type="text" id="name" name="name" required
                                        placeholder="Your name";
                                }
                                div class="form-field" {
                                    label for="email" { "Email " span class="required" { "*" } }
                                    input type="email" id="email" name="email" required
                                        placeholder="your@email.com";
                                }
                            }
                            div class="form-row" {
                                div class="form-field" {
                                    label for="organization" { "Organization" }
                                    input type="text" id="organization" name="organization"
                                        placeholder="Your organization";
                                }
                                div class="form-field" {
                                    label for="inquiry_type" { "Inquiry Type" }
                                    select id="inquiry_type" name="inquiry_type" {
                                        @for (value, label) in inquiry_types {
                                            option value=(value) { (label) }
                                        }
                                    }
                                }
                            }
                            div class="form-field" {
                                label for="message" { "Message " span class="required" { "*" } }
                                textarea id="message" name="message" rows="6" required
                                    placeholder="Tell us about your project or question" {}
                            }
                            button type="submit" class="btn btn-primary" { "Send Message" }
                        }
                    }
                }

                div class="contact-info-col" {
                    h2 class="section-header" { "Contact" }
                    dl class="contact-details" {
                        dt class="label" { "Email" }
                        dd {
                            a href="mailto:team@appliedeconomics.ai" {
                                "team@appliedeconomics.ai"
                            }
                        }
                        dt class="label" { "Location" }
                        dd { "London, United Kingdom" }
                        dt class="label" { "Response Time" }
                        dd { "Typically within 24 hours" }
                    }
                }
            }
        }
    };
    shell("Contact", content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types() -> Vec<(String, String)> {
        vec![
            ("general".into(), "General Inquiry".into()),
            ("data".into(), "Data Licensing".into()),
        ]
    }

    #[test]
    fn test_form_posts_back_to_contact() {
        let page = contact(&types()).into_string();
        assert!(page.contains("method=\"post\""));
        assert!(page.contains("action=\"/contact\""));
        assert!(page.contains("General Inquiry"));
        assert!(page.contains("Data Licensing"));
    }

    #[test]
    fn test_required_fields_marked() {
        let page = contact(&types()).into_string();
        assert!(page.contains("name=\"name\""));
        assert!(page.contains("name=\"email\""));
        assert!(page.contains("name=\"message\""));
    }

    #[test]
    fn test_submitted_view_replaces_form() {
        let page = contact_submitted().into_string();
        assert!(page.contains("Message received"));
        assert!(!page.contains("<form"));
    }
}
