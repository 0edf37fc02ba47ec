//! Integration tests for the CMS client against a mock HTTP server.

use aeai_cms::{CmsClient, CmsConfig};
use httpmock::prelude::*;

fn client_for(server: &MockServer) -> CmsClient {
    CmsClient::new(CmsConfig {
        base_url: server.base_url(),
        api_token: None,
        timeout_secs: 5,
    })
    .expect("client builds")
}

fn client_with_token(server: &MockServer, token: &str) -> CmsClient {
    CmsClient::new(CmsConfig {
        base_url: server.base_url(),
        api_token: Some(token.to_string()),
        timeout_secs: 5,
    })
    .expect("client builds")
}

#[tokio::test]
async fn fetches_job_collection() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/jobs")
            .query_param("populate", "*");
        then.status(200).json_body(serde_json::json!({
            "data": [
                {"title": "Data Analyst", "slug": "data-analyst", "location": "London",
                 "type": "full_time", "department": "Data Products", "featured": true},
                {"title": "Data Engineer", "slug": "data-engineer", "location": "London",
                 "type": "full_time"}
            ],
            "meta": {"pagination": {"total": 2}}
        }));
    });

    let jobs = client_for(&server).jobs().await.expect("jobs fetch");
    mock.assert();
    assert_eq!(jobs.len(), 2);
    let first = jobs[0].clone().into_job();
    assert_eq!(first.title, "Data Analyst");
    assert!(first.featured);
}

#[tokio::test]
async fn fetches_job_by_slug_with_filter() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/jobs")
            .query_param("filters[slug][$eq]", "data-engineer")
            .query_param("populate", "*");
        then.status(200).json_body(serde_json::json!({
            "data": [{"title": "Data Engineer", "slug": "data-engineer",
                      "location": "London", "type": "full_time",
                      "description": "Build pipelines.",
                      "requirements": "**Required Qualifications:**\n- Python"}],
            "meta": {}
        }));
    });

    let job = client_for(&server)
        .job_by_slug("data-engineer")
        .await
        .expect("fetch")
        .expect("present");
    mock.assert();
    assert_eq!(job.into_detail().title, "Data Engineer");
}

#[tokio::test]
async fn missing_slug_yields_none() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/jobs");
        then.status(200)
            .json_body(serde_json::json!({"data": [], "meta": {}}));
    });

    let job = client_for(&server).job_by_slug("ghost").await.expect("fetch");
    assert!(job.is_none());
}

#[tokio::test]
async fn papers_request_includes_sort() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/papers")
            .query_param("sort", "publicationDate:desc");
        then.status(200)
            .json_body(serde_json::json!({"data": [], "meta": {}}));
    });

    let papers = client_for(&server).papers().await.expect("fetch");
    mock.assert();
    assert!(papers.is_empty());
}

#[tokio::test]
async fn bearer_token_is_sent_when_configured() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/datasets")
            .header("authorization", "Bearer sekrit");
        then.status(200)
            .json_body(serde_json::json!({"data": [], "meta": {}}));
    });

    client_with_token(&server, "sekrit")
        .datasets()
        .await
        .expect("fetch");
    mock.assert();
}

#[tokio::test]
async fn non_2xx_status_is_an_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/datasets");
        then.status(500).body("boom");
    });

    let err = client_for(&server).datasets().await.expect_err("should fail");
    assert!(err.is_cms());
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn undecodable_payload_is_an_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/papers");
        then.status(200).body("<html>not json</html>");
    });

    let err = client_for(&server).papers().await.expect_err("should fail");
    assert!(err.is_cms());
}

#[tokio::test]
async fn unreachable_host_is_an_error() {
    // Port 1 is never listening.
    let client = CmsClient::new(CmsConfig {
        base_url: "http://127.0.0.1:1".into(),
        api_token: None,
        timeout_secs: 1,
    })
    .expect("client builds");

    let err = client.jobs().await.expect_err("should fail");
    assert!(err.is_cms());
}

#[tokio::test]
async fn null_data_collection_is_empty() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/guides");
        then.status(200)
            .json_body(serde_json::json!({"data": null, "meta": {}}));
    });

    let guides = client_for(&server).guides().await.expect("fetch");
    assert!(guides.is_empty());
}

#[tokio::test]
async fn singleton_fetch_returns_record() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/about-page");
        then.status(200).json_body(serde_json::json!({
            "data": {
                "hero": {"headline": "About Us", "subheadline": "Who we are"},
                "storyTitle": "Our Story",
                "stats": [{"value": "500M+", "label": "Records"}]
            },
            "meta": {}
        }));
    });

    let page = client_for(&server)
        .about_page()
        .await
        .expect("fetch")
        .expect("present");
    assert_eq!(page.story_title.as_deref(), Some("Our Story"));
    assert_eq!(page.stats.len(), 1);
}
