//! AEAI Markup — body-text to HTML renderers.
//!
//! Page copy is authored in a deliberately small markdown-like subset; these
//! renderers convert it to HTML strings that templates inject verbatim.
//! Three formats exist, one per content family:
//!
//! - [`render_article`]: line-oriented article bodies (insights)
//! - [`render_guide`]: block-oriented guide bodies (lab guides)
//! - [`render_requirements`]: job-requirements sections (careers)
//!
//! All renderers are total: malformed input degrades to paragraphs rather
//! than failing.

mod article;
mod guide;
mod inline;
mod requirements;

pub use article::render_article;
pub use guide::render_guide;
pub use requirements::render_requirements;

/// Escape the HTML-significant characters in plain text.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render prose as a sequence of escaped `<p>` elements, one per
/// blank-line-separated block.
///
/// Used for CMS-sourced plain copy (about sections, methodology text) where
/// no markup syntax is expected.
pub fn render_paragraphs(text: &str) -> String {
    text.split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(|block| format!("<p>{}</p>", escape_text(block)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a < b & c > \"d\""), "a &lt; b &amp; c &gt; &quot;d&quot;");
        assert_eq!(escape_text("plain"), "plain");
    }

    #[test]
    fn test_render_paragraphs() {
        assert_eq!(
            render_paragraphs("first\n\nsecond"),
            "<p>first</p>\n<p>second</p>"
        );
    }

    #[test]
    fn test_render_paragraphs_skips_blank_blocks() {
        assert_eq!(render_paragraphs("a\n\n\n\nb"), "<p>a</p>\n<p>b</p>");
        assert_eq!(render_paragraphs(""), "");
    }
}
