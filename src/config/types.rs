use crate::catalog::Catalog;
use serde::Deserialize;
use std::fmt;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetcher: FetcherConfig,

    /// Competition catalog overrides; empty means the built-in catalog
    #[serde(default, rename = "competition")]
    pub competitions: Vec<CompetitionEntry>,
}

impl Config {
    /// Builds the competition catalog described by this configuration
    pub fn catalog(&self) -> Catalog {
        if self.competitions.is_empty() {
            Catalog::builtin()
        } else {
            Catalog::from_entries(&self.competitions)
        }
    }
}

/// HTTP fetcher configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetcherConfig {
    /// Site root every relative page URL is resolved against
    #[serde(rename = "base-url", default = "default_base_url")]
    pub base_url: String,

    /// Browser identity presented on every request
    #[serde(default)]
    pub browser: BrowserProfile,

    /// Minimum time between two requests (milliseconds)
    #[serde(rename = "cooldown-ms", default = "default_cooldown_ms")]
    pub cooldown_ms: u64,

    /// Whole-request timeout (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://fbref.com".to_string()
}

fn default_cooldown_ms() -> u64 {
    6_000
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            browser: BrowserProfile::default(),
            cooldown_ms: default_cooldown_ms(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Browser fingerprint sent with every request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserProfile {
    #[default]
    Chrome,
    Edge,
    Firefox,
    Ie,
}

impl BrowserProfile {
    /// All profiles, in declaration order
    pub const ALL: [BrowserProfile; 4] = [Self::Chrome, Self::Edge, Self::Firefox, Self::Ie];
}

impl fmt::Display for BrowserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Chrome => "chrome",
            Self::Edge => "edge",
            Self::Firefox => "firefox",
            Self::Ie => "ie",
        };
        f.write_str(name)
    }
}

/// One competition in the catalog
#[derive(Debug, Clone, Deserialize)]
pub struct CompetitionEntry {
    /// Canonical display name (exact, case-sensitive key)
    pub name: String,

    /// Season history page, absolute or relative to the base URL
    #[serde(rename = "history-url")]
    pub history_url: String,

    /// Alternative spellings accepted by the CLI
    #[serde(rename = "name-variants", default)]
    pub name_variants: Vec<String>,
}
