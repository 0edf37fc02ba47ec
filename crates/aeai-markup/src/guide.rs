//! Block-oriented guide body renderer.
//!
//! Guides use a slightly different convention from articles: blocks are
//! separated by blank lines, top-level `# ` headings are allowed, bold
//! `**Label:**` lead-ins introduce a block (optionally followed by bullet
//! lines inside the same block), and fenced code blocks are preserved
//! verbatim. Unrecognised blocks render as plain paragraphs.

use crate::escape_text;

/// Render a guide body to HTML, one element per blank-line-separated block.
pub fn render_guide(body: &str) -> String {
    let mut html: Vec<String> = Vec::new();

    for block in body.split("\n\n") {
        let block = block.trim();
        if block.is_empty() {
            continue;
        }

        if let Some(rest) = block.strip_prefix("# ") {
            html.push(format!("<h1>{}</h1>", escape_text(rest)));
            continue;
        }

        if let Some(rest) = block.strip_prefix("## ") {
            html.push(format!("<h2>{}</h2>", escape_text(rest)));
            continue;
        }

        // Bold lead-in block, e.g. "**Coverage and scale:** entire
        // populations." or "**Key practices:**" followed by bullet lines.
        if block.starts_with("**") {
            if let Some(rendered) = render_lead_block(block) {
                html.push(rendered);
                continue;
            }
        }

        // Fenced code block: drop the fence lines, keep content verbatim.
        if block.starts_with("```") {
            let lines: Vec<&str> = block.lines().collect();
            let inner = if lines.len() > 2 {
                lines[1..lines.len() - 1].join("\n")
            } else {
                String::new()
            };
            html.push(format!("<pre><code>{}</code></pre>", escape_text(&inner)));
            continue;
        }

        // Bullet block
        if block.starts_with("- ") {
            html.push(render_bullets(block.lines()));
            continue;
        }

        html.push(format!("<p>{}</p>", escape_text(block)));
    }

    html.join("\n")
}

/// Render a block whose first line is a `**…**` lead-in.
///
/// Returns `None` when the block does not actually follow the convention,
/// letting it fall through to paragraph handling.
fn render_lead_block(block: &str) -> Option<String> {
    let mut lines = block.lines();
    let first = lines.next()?;
    if !first.starts_with("**") || !first.contains("**") {
        return None;
    }
    // The lead-in must close its bold span on the same line.
    if !first[2..].contains("**") {
        return None;
    }

    let lead = first.replace("**", "");
    let rest: Vec<&str> = lines.collect();

    if rest.is_empty() {
        return Some(format!("<p class=\"lead\">{}</p>", escape_text(&lead)));
    }
    if rest.iter().all(|l| l.starts_with("- ")) {
        return Some(format!(
            "<p class=\"lead\">{}</p>\n{}",
            escape_text(&lead),
            render_bullets(rest.into_iter())
        ));
    }
    // Lead-in followed by prose: render as a single paragraph.
    let mut text = lead;
    for l in &rest {
        text.push(' ');
        text.push_str(l);
    }
    Some(format!("<p class=\"lead\">{}</p>", escape_text(&text)))
}

fn render_bullets<'a>(lines: impl Iterator<Item = &'a str>) -> String {
    let items: Vec<String> = lines
        .filter(|l| l.starts_with("- "))
        .map(|l| format!("<li>{}</li>", escape_text(&l[2..])))
        .collect();
    format!("<ul>\n{}\n</ul>", items.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_heading() {
        assert_eq!(render_guide("# Introduction"), "<h1>Introduction</h1>");
    }

    #[test]
    fn test_section_heading() {
        assert_eq!(
            render_guide("## Why Reproducibility Matters"),
            "<h2>Why Reproducibility Matters</h2>"
        );
    }

    #[test]
    fn test_bold_lead_in_with_prose() {
        assert_eq!(
            render_guide("**Coverage and scale:** entire populations."),
            "<p class=\"lead\">Coverage and scale: entire populations.</p>"
        );
    }

    #[test]
    fn test_bold_lead_in_with_bullets() {
        let body = "**Key methods:**\n- Matching estimators\n- Propensity scores";
        assert_eq!(
            render_guide(body),
            "<p class=\"lead\">Key methods:</p>\n<ul>\n<li>Matching estimators</li>\n<li>Propensity scores</li>\n</ul>"
        );
    }

    #[test]
    fn test_unclosed_bold_falls_through_to_paragraph() {
        assert_eq!(
            render_guide("**dangling open bold"),
            "<p>**dangling open bold</p>"
        );
    }

    #[test]
    fn test_code_block() {
        let body = "```\nproject/\n├── README.md\n```";
        assert_eq!(
            render_guide(body),
            "<pre><code>project/\n├── README.md</code></pre>"
        );
    }

    #[test]
    fn test_empty_code_block() {
        assert_eq!(render_guide("```\n```"), "<pre><code></code></pre>");
    }

    #[test]
    fn test_bullet_block() {
        let body = "- Tax records\n- Education records";
        assert_eq!(
            render_guide(body),
            "<ul>\n<li>Tax records</li>\n<li>Education records</li>\n</ul>"
        );
    }

    #[test]
    fn test_paragraph_and_escaping() {
        assert_eq!(
            render_guide("costs < benefits & more"),
            "<p>costs &lt; benefits &amp; more</p>"
        );
    }

    #[test]
    fn test_blocks_joined_in_order() {
        let body = "# Guide\n\nIntro paragraph.\n\n- a\n- b";
        let html = render_guide(body);
        let h1 = html.find("<h1>").unwrap();
        let p = html.find("<p>").unwrap();
        let ul = html.find("<ul>").unwrap();
        assert!(h1 < p && p < ul);
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(render_guide(""), "");
    }
}
