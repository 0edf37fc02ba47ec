//! Line-oriented article body renderer.
//!
//! Converts the simple markdown-style format used by insight articles into
//! HTML. Handles `## `/`### ` headings, paragraphs, `> ` blockquotes,
//! `- ` and `1. ` lists, and the inline bold/code/link syntax. A single
//! sequential pass over the lines; no nesting, no backtracking. Malformed
//! input falls through to paragraph handling, so rendering never fails.

use std::sync::LazyLock;

use regex::Regex;

use crate::inline::process_inline;

static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s").expect("valid ordered-item pattern"));

/// The list element currently open, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Ordered,
    Unordered,
}

impl ListKind {
    fn open_tag(self) -> &'static str {
        match self {
            Self::Ordered => "<ol>",
            Self::Unordered => "<ul>",
        }
    }

    fn close_tag(self) -> &'static str {
        match self {
            Self::Ordered => "</ol>",
            Self::Unordered => "</ul>",
        }
    }
}

fn is_special(trimmed: &str) -> bool {
    trimmed.starts_with("## ")
        || trimmed.starts_with("### ")
        || trimmed.starts_with("> ")
        || trimmed.starts_with("- ")
        || ORDERED_ITEM.is_match(trimmed)
}

/// Render an article body to HTML.
///
/// Output blocks are joined with newlines, matching the shape the article
/// template injects verbatim into the page.
pub fn render_article(body: &str) -> String {
    let lines: Vec<&str> = body.lines().collect();
    let mut html: Vec<String> = Vec::new();
    let mut in_list: Option<ListKind> = None;

    let close_list = |html: &mut Vec<String>, in_list: &mut Option<ListKind>| {
        if let Some(kind) = in_list.take() {
            html.push(kind.close_tag().to_string());
        }
    };

    let mut i = 0;
    while i < lines.len() {
        let trimmed = lines[i].trim();

        // Blank line: terminates any open list.
        if trimmed.is_empty() {
            close_list(&mut html, &mut in_list);
            i += 1;
            continue;
        }

        // H2 (but not H3's leading "###")
        if trimmed.starts_with("## ") && !trimmed.starts_with("### ") {
            close_list(&mut html, &mut in_list);
            html.push(format!("<h2>{}</h2>", process_inline(&trimmed[3..])));
            i += 1;
            continue;
        }

        // H3
        if trimmed.starts_with("### ") {
            close_list(&mut html, &mut in_list);
            html.push(format!("<h3>{}</h3>", process_inline(&trimmed[4..])));
            i += 1;
            continue;
        }

        // Blockquote: consecutive "> " lines join into one quote.
        if trimmed.starts_with("> ") {
            close_list(&mut html, &mut in_list);
            let mut quote_lines: Vec<&str> = Vec::new();
            while i < lines.len() && lines[i].trim().starts_with("> ") {
                quote_lines.push(&lines[i].trim()[2..]);
                i += 1;
            }
            html.push(format!(
                "<blockquote><p>{}</p></blockquote>",
                process_inline(&quote_lines.join(" "))
            ));
            continue;
        }

        // Ordered list item (1. 2. etc)
        if ORDERED_ITEM.is_match(trimmed) {
            if in_list != Some(ListKind::Ordered) {
                close_list(&mut html, &mut in_list);
                html.push(ListKind::Ordered.open_tag().to_string());
                in_list = Some(ListKind::Ordered);
            }
            let text = ORDERED_ITEM.replace(trimmed, "");
            html.push(format!("<li>{}</li>", process_inline(&text)));
            i += 1;
            continue;
        }

        // Unordered list item
        if trimmed.starts_with("- ") {
            if in_list != Some(ListKind::Unordered) {
                close_list(&mut html, &mut in_list);
                html.push(ListKind::Unordered.open_tag().to_string());
                in_list = Some(ListKind::Unordered);
            }
            html.push(format!("<li>{}</li>", process_inline(&trimmed[2..])));
            i += 1;
            continue;
        }

        // Paragraph: collect consecutive non-empty, non-special lines.
        close_list(&mut html, &mut in_list);
        let mut para_lines: Vec<&str> = Vec::new();
        while i < lines.len() {
            let t = lines[i].trim();
            if t.is_empty() || is_special(t) {
                break;
            }
            para_lines.push(t);
            i += 1;
        }
        if !para_lines.is_empty() {
            html.push(format!("<p>{}</p>", process_inline(&para_lines.join(" "))));
        }
    }

    close_list(&mut html, &mut in_list);
    html.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings() {
        assert_eq!(render_article("## The Invitation"), "<h2>The Invitation</h2>");
        assert_eq!(render_article("### Sub Point"), "<h3>Sub Point</h3>");
    }

    #[test]
    fn test_h3_not_misread_as_h2() {
        let html = render_article("### Deep Heading");
        assert!(!html.contains("<h2>"));
        assert!(html.contains("<h3>Deep Heading</h3>"));
    }

    #[test]
    fn test_paragraph_joins_consecutive_lines() {
        let html = render_article("first line\nsecond line\n\nnext para");
        assert_eq!(html, "<p>first line second line</p>\n<p>next para</p>");
    }

    #[test]
    fn test_blockquote_joins_consecutive_lines() {
        let body = "> The problem is not design.\n> The problem is training data.";
        assert_eq!(
            render_article(body),
            "<blockquote><p>The problem is not design. The problem is training data.</p></blockquote>"
        );
    }

    #[test]
    fn test_unordered_list() {
        let html = render_article("- one\n- two\n\nafter");
        assert_eq!(html, "<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n<p>after</p>");
    }

    #[test]
    fn test_ordered_list_markers_ignored() {
        let html = render_article("1. first\n7. second");
        assert_eq!(html, "<ol>\n<li>first</li>\n<li>second</li>\n</ol>");
    }

    #[test]
    fn test_list_closed_by_heading() {
        let html = render_article("- item\n## Next");
        assert_eq!(html, "<ul>\n<li>item</li>\n</ul>\n<h2>Next</h2>");
    }

    #[test]
    fn test_list_kind_switch_closes_previous() {
        let html = render_article("- a\n1. b");
        assert_eq!(html, "<ul>\n<li>a</li>\n</ul>\n<ol>\n<li>b</li>\n</ol>");
    }

    #[test]
    fn test_trailing_list_is_closed() {
        let html = render_article("- only item");
        assert!(html.ends_with("</ul>"));
    }

    #[test]
    fn test_inline_inside_blocks() {
        let html = render_article("## **Bold** Title\n\n1. **Florida** — 184,000");
        assert!(html.contains("<h2><strong>Bold</strong> Title</h2>"));
        assert!(html.contains("<li><strong>Florida</strong> — 184,000</li>"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render_article(""), "");
        assert_eq!(render_article("\n\n\n"), "");
    }

    #[test]
    fn test_indented_lines_are_trimmed() {
        assert_eq!(render_article("   padded text   "), "<p>padded text</p>");
    }

    #[test]
    fn test_realistic_article_shape() {
        let body = "\
## Key Findings

Between 2020 and 2024, net migration totalled 1.8 million.

1. **Florida** — 184,000 net arrivals
2. **Texas** — 167,000

> Remote work changed where economic power concentrates.

The full column is available [online](https://voxeu.org).";
        let html = render_article(body);
        assert!(html.contains("<h2>Key Findings</h2>"));
        assert!(html.contains("<ol>"));
        assert!(html.contains("<li><strong>Texas</strong> — 167,000</li>"));
        assert!(html.contains("</ol>"));
        assert!(html.contains("<blockquote><p>Remote work changed where economic power concentrates.</p></blockquote>"));
        assert!(html.contains("<a href=\"https://voxeu.org\">online</a>"));
    }
}
