//! Property tests: the renderers are total and produce balanced lists.

use aeai_markup::{render_article, render_guide, render_requirements};
use proptest::prelude::*;

proptest! {
    #[test]
    fn article_renderer_never_panics(body in "\\PC*") {
        let _ = render_article(&body);
    }

    #[test]
    fn guide_renderer_never_panics(body in "\\PC*") {
        let _ = render_guide(&body);
    }

    #[test]
    fn requirements_renderer_never_panics(body in "\\PC*") {
        let _ = render_requirements(&body);
    }

    #[test]
    fn article_lists_are_balanced(body in "(- [a-z ]{0,10}\n|\\d\\. [a-z ]{0,10}\n|[a-z ]{0,10}\n|\n){0,30}") {
        let html = render_article(&body);
        prop_assert_eq!(html.matches("<ul>").count(), html.matches("</ul>").count());
        prop_assert_eq!(html.matches("<ol>").count(), html.matches("</ol>").count());
    }

    #[test]
    fn article_paragraphs_are_wrapped(line in "[a-zA-Z][a-zA-Z ]{0,40}") {
        let html = render_article(&line);
        prop_assert!(html.starts_with("<p>"));
        prop_assert!(html.ends_with("</p>"));
    }
}
