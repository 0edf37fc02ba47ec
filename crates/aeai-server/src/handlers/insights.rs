//! Insights handlers. Entirely static content; article bodies go through
//! the line-oriented renderer.

use aeai_content::insights;
use aeai_markup::render_article;
use axum::extract::Path;
use axum::http::StatusCode;
use maud::Markup;

use super::not_found;

/// `GET /insights`
pub async fn index() -> Markup {
    let listings = insights::insights();
    aeai_views::pages::insights_index(&listings)
}

/// `GET /insights/{slug}`
pub async fn detail(Path(slug): Path<String>) -> Result<Markup, (StatusCode, Markup)> {
    match insights::insight_by_slug(&slug) {
        Some(insight) => {
            let related = insights::related_insights(&slug, 3);
            let body_html = render_article(&insight.body);
            Ok(aeai_views::pages::insight_detail(&insight, &related, &body_html))
        }
        None => Err(not_found().await),
    }
}
