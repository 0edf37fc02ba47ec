//! Services handlers. Entirely static content.

use aeai_content::services;
use axum::extract::Path;
use axum::http::StatusCode;
use maud::Markup;

use super::not_found;

/// `GET /services`
pub async fn index() -> Markup {
    let listings = services::services();
    let segments = services::client_segments();
    let engagement = services::engagement_model_specs();
    aeai_views::pages::services_index(&listings, &segments, &engagement)
}

/// `GET /services/{slug}`
pub async fn detail(Path(slug): Path<String>) -> Result<Markup, (StatusCode, Markup)> {
    match services::service_by_slug(&slug) {
        Some(service) => {
            let links = services::all_service_links();
            Ok(aeai_views::pages::service_detail(&service, &links))
        }
        None => Err(not_found().await),
    }
}
