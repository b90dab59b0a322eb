//! Page fetching
//!
//! This module handles all HTTP traffic to the statistics site:
//! - Building a client that presents one browser fingerprint for its lifetime
//! - Pacing requests through an explicit cooldown gate
//! - Classifying response statuses into rate-limit / unavailable / success

mod client;
mod cooldown;

pub use client::{browser_headers, build_http_client, classify_status, StatusClass};
pub use cooldown::Cooldown;

use crate::config::FetcherConfig;
use crate::extract::Page;
use crate::{FbrefError, Result};
use reqwest::Client;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use url::Url;

/// A fetched page body, not yet parsed
///
/// The body is kept as text so that callers can hold it across `.await`
/// points; parsing into a [`Page`] happens in the synchronous extraction step.
#[derive(Debug, Clone)]
pub struct RawDocument {
    /// Final URL of the response
    pub url: String,

    /// HTTP status code
    pub status: u16,

    /// Response body
    pub body: String,
}

impl RawDocument {
    /// Parses the body into a queryable page
    pub fn parse(&self) -> Page {
        Page::parse(&self.url, &self.body)
    }
}

/// HTTP fetcher bound to one site, one browser profile and one cooldown gate
pub struct Fetcher {
    client: Client,
    base_url: Url,
    cooldown: Cooldown,
    requests: AtomicU64,
}

impl Fetcher {
    /// Creates a fetcher from configuration
    pub fn new(config: &FetcherConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        let client = build_http_client(config)?;

        tracing::debug!(
            "Fetcher ready for {} as {} (cooldown {}ms)",
            base_url,
            config.browser,
            config.cooldown_ms
        );

        Ok(Self {
            client,
            base_url,
            cooldown: Cooldown::new(Duration::from_millis(config.cooldown_ms)),
            requests: AtomicU64::new(0),
        })
    }

    /// Number of requests issued so far
    pub fn request_count(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }

    /// Resolves a possibly relative link against the base URL
    pub fn resolve(&self, href: &str) -> Result<Url> {
        crate::url::absolute_url(&self.base_url, href)
    }

    /// Fetches a page
    ///
    /// # Status handling
    ///
    /// | Status | Outcome |
    /// |--------|---------|
    /// | 2xx | `Ok(RawDocument)` |
    /// | 429 | `Err(RateLimited)`, never retried |
    /// | 404, 504 | `Err(PageUnavailable)` |
    /// | other | `Ok(RawDocument)` with the error page body |
    ///
    /// Every call first waits on the cooldown gate. `url` must be absolute;
    /// see [`Fetcher::fetch_path`] for site links.
    pub async fn fetch(&self, url: &str) -> Result<RawDocument> {
        let target = Url::parse(url)?;
        if target.scheme() != "http" && target.scheme() != "https" {
            return Err(FbrefError::MalformedInput(format!(
                "only HTTP and HTTPS URLs can be fetched, got '{}'",
                url
            )));
        }
        self.get(target).await
    }

    /// Fetches a site link, joined against the configured base URL
    pub async fn fetch_path(&self, path: &str) -> Result<RawDocument> {
        let target = self.resolve(path)?;
        self.get(target).await
    }

    async fn get(&self, target: Url) -> Result<RawDocument> {
        let url = target.to_string();

        self.cooldown.acquire().await;
        let count = self.requests.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::debug!("GET {} (request #{})", url, count);

        let response = self
            .client
            .get(target)
            .send()
            .await
            .map_err(|source| FbrefError::Http {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        match classify_status(status) {
            StatusClass::RateLimited => {
                tracing::warn!("Rate limited (429) at {}", url);
                return Err(FbrefError::RateLimited { url });
            }
            StatusClass::Unavailable => {
                return Err(FbrefError::PageUnavailable {
                    url,
                    status: status.as_u16(),
                });
            }
            StatusClass::PassThrough => {
                tracing::warn!(
                    "Unexpected status {} at {}; passing body through",
                    status.as_u16(),
                    url
                );
            }
            StatusClass::Success => {}
        }

        let final_url = response.url().to_string();
        let body = response.text().await.map_err(|source| FbrefError::Http {
            url: url.clone(),
            source,
        })?;

        tracing::trace!("Fetched {} bytes from {}", body.len(), final_url);

        Ok(RawDocument {
            url: final_url,
            status: status.as_u16(),
            body,
        })
    }
}
