//! Integration tests for the query facade
//!
//! These tests use wiremock to serve synthetic pages and drive every
//! operation end-to-end through the fetcher and extractors.

mod fetch_tests;
mod pages;
mod query_tests;

use fbref_extract::config::{CompetitionEntry, Config, FetcherConfig};
use fbref_extract::{BrowserProfile, Fbref};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Season bounds are checked against this year in every test
pub const CURRENT_YEAR: i32 = 2024;

/// Creates a test configuration pointing at the mock server
pub fn create_test_config(base_url: &str) -> Config {
    Config {
        fetcher: FetcherConfig {
            base_url: base_url.to_string(),
            browser: BrowserProfile::Firefox,
            cooldown_ms: 0,
            timeout_secs: 5,
        },
        competitions: vec![CompetitionEntry {
            name: "Serie A".to_string(),
            history_url: pages::HISTORY_PATH.to_string(),
            name_variants: vec!["serie a".to_string()],
        }],
    }
}

pub fn create_client(server: &MockServer) -> Fbref {
    Fbref::new(&create_test_config(&server.uri()))
        .expect("client should build")
        .with_current_year(CURRENT_YEAR)
}

pub async fn mount_page(server: &MockServer, page_path: &str, body: impl Into<String>) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body.into())
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

pub async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or(0)
}
