use crate::config::types::{CompetitionEntry, Config, FetcherConfig};
use crate::ConfigError;
use std::collections::HashSet;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    let base = validate_fetcher_config(&config.fetcher)?;
    validate_competitions(&config.competitions, &base)?;
    Ok(())
}

/// Validates fetcher configuration, returning the parsed base URL
fn validate_fetcher_config(config: &FetcherConfig) -> Result<Url, ConfigError> {
    let base = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if base.scheme() != "http" && base.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "base-url '{}' must use http or https",
            config.base_url
        )));
    }

    if config.cooldown_ms > 60_000 {
        return Err(ConfigError::Validation(format!(
            "cooldown-ms must be <= 60000ms, got {}ms",
            config.cooldown_ms
        )));
    }

    if config.timeout_secs < 1 || config.timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be between 1 and 300, got {}",
            config.timeout_secs
        )));
    }

    Ok(base)
}

/// Validates competition entries
fn validate_competitions(entries: &[CompetitionEntry], base: &Url) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for entry in entries {
        if entry.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "competition name cannot be empty".to_string(),
            ));
        }

        if !seen.insert(entry.name.as_str()) {
            return Err(ConfigError::Validation(format!(
                "competition '{}' is declared more than once",
                entry.name
            )));
        }

        base.join(&entry.history_url).map_err(|e| {
            ConfigError::InvalidUrl(format!(
                "Invalid history-url '{}' for '{}': {}",
                entry.history_url, entry.name, e
            ))
        })?;
    }

    Ok(())
}
