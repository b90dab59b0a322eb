//! fbref-extract: typed football statistics from fbref.com pages
//!
//! This crate fetches competition pages from the sports-statistics site and
//! turns their embedded HTML tables into typed records: season indexes, league
//! metadata, top scorers, fixtures, standings and per-team detail tables.

pub mod catalog;
pub mod config;
pub mod extract;
pub mod fetcher;
pub mod model;
pub mod query;
pub mod url;

use thiserror::Error;

/// Main error type for fbref-extract operations
#[derive(Debug, Error)]
pub enum FbrefError {
    #[error("Rate limited by upstream (HTTP 429) at {url}; see https://www.sports-reference.com/bot-traffic.html")]
    RateLimited { url: String },

    #[error("Page unavailable (HTTP {status}) at {url}")]
    PageUnavailable { url: String, status: u16 },

    #[error("Unknown competition '{name}'; valid competitions: {}", .valid.join(", "))]
    InvalidCompetition { name: String, valid: Vec<String> },

    #[error("Season '{season}' ends after the current year {current_year}")]
    InvalidYear { season: String, current_year: i32 },

    #[error("Season '{season}' not found; available: {}", .available.join(", "))]
    InvalidSeason {
        season: String,
        available: Vec<String>,
    },

    #[error("Team '{team}' not found in standings; valid teams: {}", .valid.join(", "))]
    InvalidTeam { team: String, valid: Vec<String> },

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Expected {context} not found in {url}")]
    MissingTable { url: String, context: String },

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("Invalid CSS selector: {0}")]
    Selector(String),

    #[error("Invalid table pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for fbref-extract operations
pub type Result<T> = std::result::Result<T, FbrefError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use catalog::{Catalog, Competition};
pub use config::{BrowserProfile, Config};
pub use extract::{CellValue, ExtractedTable, SeasonIndex};
pub use fetcher::{Fetcher, RawDocument};
pub use model::{
    Fixture, RowKind, Score, ScoutingStat, SeasonRecord, TeamDetail, TeamSummary, TopScorerDetail,
    TopScorerEntry,
};
pub use query::Fbref;
