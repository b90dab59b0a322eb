use crate::pages;
use crate::{create_client, mount_page, request_count};
use fbref_extract::FbrefError;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_status(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path(pages::HISTORY_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_string("<html><p>error</p></html>"))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_rate_limited_is_not_retried() {
    let server = MockServer::start().await;
    mount_status(&server, 429).await;
    let fbref = create_client(&server);

    let result = fbref.valid_seasons("Serie A").await;

    assert!(matches!(result, Err(FbrefError::RateLimited { .. })));
    assert_eq!(request_count(&server).await, 1);
}

#[tokio::test]
async fn test_not_found_is_unavailable() {
    let server = MockServer::start().await;
    mount_status(&server, 404).await;
    let fbref = create_client(&server);

    match fbref.valid_seasons("Serie A").await {
        Err(FbrefError::PageUnavailable { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected PageUnavailable, got {:?}", other),
    }
}

#[tokio::test]
async fn test_gateway_timeout_is_unavailable() {
    let server = MockServer::start().await;
    mount_status(&server, 504).await;
    let fbref = create_client(&server);

    match fbref.top_scorers("Serie A").await {
        Err(FbrefError::PageUnavailable { status, .. }) => assert_eq!(status, 504),
        other => panic!("expected PageUnavailable, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_body_passes_through() {
    let server = MockServer::start().await;
    mount_status(&server, 500).await;
    let fbref = create_client(&server);

    // The error page has no season table, so extraction reports it
    let result = fbref.valid_seasons("Serie A").await;

    assert!(matches!(result, Err(FbrefError::MissingTable { .. })));
}

#[tokio::test]
async fn test_fetcher_resolves_relative_urls() {
    let server = MockServer::start().await;
    mount_page(&server, pages::HISTORY_PATH, pages::HISTORY).await;
    let fbref = create_client(&server);

    let raw = fbref.fetcher().fetch_path(pages::HISTORY_PATH).await.unwrap();

    assert_eq!(raw.status, 200);
    assert!(raw.url.ends_with(pages::HISTORY_PATH));
    assert!(raw.body.contains("Serie A"));
    assert_eq!(fbref.fetcher().request_count(), 1);
}

#[tokio::test]
async fn test_fetch_requires_absolute_url() {
    let server = MockServer::start().await;
    mount_page(&server, pages::HISTORY_PATH, pages::HISTORY).await;
    let fbref = create_client(&server);

    let relative = fbref.fetcher().fetch(pages::HISTORY_PATH).await;
    let absolute = format!("{}{}", server.uri(), pages::HISTORY_PATH);
    let raw = fbref.fetcher().fetch(&absolute).await.unwrap();

    assert!(matches!(relative, Err(FbrefError::UrlParse(_))));
    assert_eq!(raw.status, 200);
    assert_eq!(request_count(&server).await, 1);
}

#[tokio::test]
async fn test_browser_headers_are_sent() {
    let server = MockServer::start().await;
    // Only a request carrying the Firefox identity gets the page
    Mock::given(method("GET"))
        .and(path(pages::HISTORY_PATH))
        .and(header(
            "user-agent",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:94.0) Gecko/20100101 Firefox/94.0",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(pages::HISTORY))
        .mount(&server)
        .await;
    let fbref = create_client(&server);

    let seasons = fbref.valid_seasons("Serie A").await.unwrap();

    assert_eq!(seasons.len(), 3);
}
