//! Query facade
//!
//! [`Fbref`] is the public entry point. Each operation validates its
//! arguments once through [`Fbref::check`], resolves the pages it needs
//! through the season index, fetches them sequentially and hands each body to
//! the matching extractor.

mod competition;
mod fixtures;
mod guard;
mod teams;

pub use guard::{parse_season, validate_date, Preconditions};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::fetcher::{Fetcher, RawDocument};
use crate::Result;
use chrono::Datelike;

/// Client for the statistics site
pub struct Fbref {
    catalog: Catalog,
    fetcher: Fetcher,
    current_year: i32,
}

impl Fbref {
    /// Creates a client from configuration
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            catalog: config.catalog(),
            fetcher: Fetcher::new(&config.fetcher)?,
            current_year: chrono::Utc::now().year(),
        })
    }

    /// Creates a client with the built-in settings and catalog
    pub fn with_defaults() -> Result<Self> {
        Self::new(&Config::default())
    }

    /// Overrides the year season bounds are checked against
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = year;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    async fn fetch(&self, url: &str) -> Result<RawDocument> {
        self.fetcher.fetch_path(url).await
    }
}
