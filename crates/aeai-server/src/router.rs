//! Route table for the site.

use std::path::PathBuf;

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the application router.
///
/// `assets_dir` is served under `/assets` (stylesheet, images).
pub fn router(state: AppState, assets_dir: PathBuf) -> Router {
    Router::new()
        .route("/", get(handlers::home::index))
        .route("/about", get(handlers::about::index))
        .route("/services", get(handlers::services::index))
        .route("/services/{slug}", get(handlers::services::detail))
        .route("/industries", get(handlers::industries::index))
        .route("/industries/{slug}", get(handlers::industries::detail))
        .route("/data", get(handlers::data::index))
        .route("/data/{slug}", get(handlers::data::detail))
        .route("/research", get(handlers::research::index))
        .route("/research/{slug}", get(handlers::research::detail))
        .route("/insights", get(handlers::insights::index))
        .route("/insights/{slug}", get(handlers::insights::detail))
        .route("/careers", get(handlers::careers::index))
        .route("/careers/{slug}", get(handlers::careers::detail))
        .route("/lab", get(handlers::lab::index))
        .route("/lab/guides/{slug}", get(handlers::lab::guide))
        .route(
            "/contact",
            get(handlers::contact::form).post(handlers::contact::submit),
        )
        .route("/healthz", get(handlers::health))
        .nest_service("/assets", ServeDir::new(assets_dir))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aeai_cms::CmsConfig;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    /// Router whose CMS points at a closed port, so every page exercises
    /// the fallback path.
    fn offline_router() -> Router {
        let state = AppState::new(CmsConfig {
            base_url: "http://127.0.0.1:1".into(),
            api_token: None,
            timeout_secs: 1,
        })
        .expect("state builds");
        router(state, PathBuf::from("assets"))
    }

    async fn get_page(path: &str) -> (StatusCode, String) {
        let response = offline_router()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    #[tokio::test]
    async fn home_renders() {
        let (status, body) = get_page("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Economic Intelligence Built on Evidence"));
        assert!(body.contains("What We Do"));
    }

    #[tokio::test]
    async fn careers_falls_back_when_cms_is_down() {
        let (status, body) = get_page("/careers").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Data Analyst"));
        assert!(body.contains("Summer Research Fellow"));
    }

    #[tokio::test]
    async fn dataset_detail_falls_back_by_slug() {
        let (status, body) = get_page("/data/aipnet").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("AIPNET"));
        assert!(body.contains("Methodology"));
    }

    #[tokio::test]
    async fn unknown_dataset_slug_still_renders() {
        let (status, body) = get_page("/data/some-future-dataset").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Some Future Dataset"));
    }

    #[tokio::test]
    async fn insight_article_renders_body_markup() {
        let (status, body) = get_page("/insights/voxeu-remote-workers").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h2>Key Findings</h2>"));
        assert!(body.contains("<blockquote>"));
        assert!(body.contains("Related Insights"));
    }

    #[tokio::test]
    async fn unknown_insight_is_404() {
        let (status, body) = get_page("/insights/this-does-not-exist").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page not found"));
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let (status, _) = get_page("/no/such/page").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn service_and_industry_details_render() {
        let (status, body) = get_page("/services/economic-consulting").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Bespoke Economic Analysis"));

        let (status, body) = get_page("/industries/central-banks").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Monetary Policy"));
    }

    #[tokio::test]
    async fn healthz_is_plain_ok() {
        let (status, body) = get_page("/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn contact_form_roundtrip() {
        let (status, body) = get_page("/contact").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Send us a message"));

        let request = Request::builder()
            .method("POST")
            .uri("/contact")
            .header(
                header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(Body::from(
                "name=Ada&email=ada%40example.org&message=Hello&inquiry_type=general",
            ))
            .unwrap();
        let response = offline_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8_lossy(&bytes);
        assert!(body.contains("Message received"));
    }
}
