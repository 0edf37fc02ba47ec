//! Renderer for the job-requirements format.
//!
//! Requirements copy alternates `**Section:**` headers with bullet lines:
//!
//! ```text
//! **Required Qualifications:**
//! - Strong programming skills in Python or R
//! - Familiarity with SQL
//! ```
//!
//! Each such block becomes a heading plus a list; anything else renders as a
//! paragraph.

use crate::escape_text;

/// Render a requirements body to HTML.
pub fn render_requirements(body: &str) -> String {
    let mut html: Vec<String> = Vec::new();

    for block in body.split("\n\n") {
        let block = block.trim();
        if block.is_empty() {
            continue;
        }

        if block.starts_with("**") && block.contains(":**") {
            let mut lines = block.lines();
            let title = lines
                .next()
                .unwrap_or_default()
                .replace("**", "")
                .replacen(':', "", 1);
            let items: Vec<String> = lines
                .map(|l| {
                    let text = l.strip_prefix("- ").unwrap_or(l);
                    format!("<li>{}</li>", escape_text(text))
                })
                .collect();
            html.push(format!(
                "<h3>{}</h3>\n<ul>\n{}\n</ul>",
                escape_text(&title),
                items.join("\n")
            ));
            continue;
        }

        html.push(format!("<p>{}</p>", escape_text(block)));
    }

    html.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_with_bullets() {
        let body = "**Required Qualifications:**\n- Python or R\n- SQL";
        assert_eq!(
            render_requirements(body),
            "<h3>Required Qualifications</h3>\n<ul>\n<li>Python or R</li>\n<li>SQL</li>\n</ul>"
        );
    }

    #[test]
    fn test_two_sections() {
        let body = "**Required:**\n- a\n\n**Preferred:**\n- b";
        let html = render_requirements(body);
        assert!(html.contains("<h3>Required</h3>"));
        assert!(html.contains("<h3>Preferred</h3>"));
        assert_eq!(html.matches("<ul>").count(), 2);
    }

    #[test]
    fn test_plain_block_is_paragraph() {
        assert_eq!(
            render_requirements("Requirements will be discussed during the application process."),
            "<p>Requirements will be discussed during the application process.</p>"
        );
    }

    #[test]
    fn test_only_first_colon_removed_from_title() {
        let body = "**Nice: to have:**\n- x";
        let html = render_requirements(body);
        assert!(html.contains("<h3>Nice to have:</h3>"));
    }
}
