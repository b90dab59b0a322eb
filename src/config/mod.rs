//! Configuration module for fbref-extract
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every field has a default, so an empty file (or no file at all) yields the
//! built-in fetcher settings and competition catalog.
//!
//! # Example
//!
//! ```no_run
//! use fbref_extract::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("fbref.toml")).unwrap();
//! println!("Requests are spaced {}ms apart", config.fetcher.cooldown_ms);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{BrowserProfile, CompetitionEntry, Config, FetcherConfig};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
