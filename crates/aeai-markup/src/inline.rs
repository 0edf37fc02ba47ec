//! Inline markup replacement shared by the block renderers.

use std::sync::LazyLock;

use regex::Regex;

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid bold pattern"));
static CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`(.+?)`").expect("valid code pattern"));
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.+?)\]\((.+?)\)").expect("valid link pattern"));

/// Apply inline replacements to a line of text.
///
/// `**bold**` becomes `<strong>`, `` `code` `` becomes `<code>`, and
/// `[text](url)` becomes an anchor. Replacements are non-greedy and applied
/// in that order; unmatched delimiters pass through untouched.
pub fn process_inline(text: &str) -> String {
    let text = BOLD.replace_all(text, "<strong>$1</strong>");
    let text = CODE.replace_all(&text, "<code>$1</code>");
    let text = LINK.replace_all(&text, "<a href=\"$2\">$1</a>");
    text.into_owned()
}
