//! HTTP client construction and response classification

use crate::config::{BrowserProfile, FetcherConfig};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// How a response status is treated by the fetcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// 2xx
    Success,
    /// 429 Too Many Requests
    RateLimited,
    /// 404 or 504
    Unavailable,
    /// Any other status; the body is handed to the caller unchanged
    PassThrough,
}

/// Classifies a response status
pub fn classify_status(status: StatusCode) -> StatusClass {
    match status {
        StatusCode::TOO_MANY_REQUESTS => StatusClass::RateLimited,
        StatusCode::NOT_FOUND | StatusCode::GATEWAY_TIMEOUT => StatusClass::Unavailable,
        s if s.is_success() => StatusClass::Success,
        _ => StatusClass::PassThrough,
    }
}

/// Returns the fixed header set for a browser profile
///
/// `Accept-Encoding` is deliberately absent: reqwest negotiates it itself
/// and only then decompresses transparently.
pub fn browser_headers(profile: BrowserProfile) -> HeaderMap {
    let pairs: &[(&str, &str)] = match profile {
        BrowserProfile::Chrome => &[
            ("accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.9"),
            ("accept-language", "fr-FR,fr;q=0.9,en-US;q=0.8,en;q=0.7"),
            ("cache-control", "max-age=0"),
            ("sec-fetch-dest", "document"),
            ("sec-fetch-mode", "navigate"),
            ("sec-fetch-site", "same-origin"),
            ("sec-fetch-user", "?1"),
            ("upgrade-insecure-requests", "1"),
            ("user-agent", "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/95.0.4638.69 Safari/537.36"),
        ],
        BrowserProfile::Edge => &[
            ("accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.9"),
            ("accept-language", "en-GB,en;q=0.9,en-US;q=0.8"),
            ("cache-control", "max-age=0"),
            ("sec-fetch-dest", "document"),
            ("sec-fetch-mode", "navigate"),
            ("sec-fetch-site", "none"),
            ("sec-fetch-user", "?1"),
            ("upgrade-insecure-requests", "1"),
            ("user-agent", "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/95.0.4638.69 Safari/537.36 Edg/95.0.1020.44"),
        ],
        BrowserProfile::Firefox => &[
            ("accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8"),
            ("accept-language", "fr,fr-FR;q=0.8,en-US;q=0.5,en;q=0.3"),
            ("dnt", "1"),
            ("upgrade-insecure-requests", "1"),
            ("sec-fetch-dest", "document"),
            ("sec-fetch-mode", "navigate"),
            ("sec-fetch-site", "cross-site"),
            ("user-agent", "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:94.0) Gecko/20100101 Firefox/94.0"),
        ],
        BrowserProfile::Ie => &[
            ("accept", "text/html, application/xhtml+xml, image/jxr, */*"),
            ("accept-language", "en-GB"),
            ("user-agent", "Mozilla/5.0 (Windows NT 10.0; WOW64; Trident/7.0; rv:11.0) like Gecko"),
        ],
    };

    let mut headers = HeaderMap::with_capacity(pairs.len());
    for &(name, value) in pairs {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
    headers
}

/// Builds an HTTP client presenting the configured browser profile
///
/// No cookie store is enabled, so nothing persists between requests.
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .default_headers(browser_headers(config.browser))
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}
