//! Industries handlers. Entirely static content.

use aeai_content::industries;
use axum::extract::Path;
use axum::http::StatusCode;
use maud::Markup;

use super::not_found;

/// `GET /industries`
pub async fn index() -> Markup {
    let listings = industries::industries();
    aeai_views::pages::industries_index(&listings)
}

/// `GET /industries/{slug}`
pub async fn detail(Path(slug): Path<String>) -> Result<Markup, (StatusCode, Markup)> {
    match industries::industry_by_slug(&slug) {
        Some(industry) => Ok(aeai_views::pages::industry_detail(&industry)),
        None => Err(not_found().await),
    }
}
