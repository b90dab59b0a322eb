use crate::{FbrefError, Result};

/// Derives a season's "Scores & Fixtures" page from its stats page URL
///
/// `/en/comps/11/2023-2024/2023-2024-Serie-A-Stats` becomes
/// `/en/comps/11/2023-2024/schedule/2023-2024-Serie-A-Scores-and-Fixtures`.
/// Works for both relative and absolute URLs.
pub fn schedule_url(season_url: &str) -> Result<String> {
    let season_url = season_url.trim_end_matches('/');
    let malformed = || {
        FbrefError::MalformedInput(format!(
            "cannot derive a fixtures page from season URL '{}'",
            season_url
        ))
    };

    let (dir, page) = season_url.rsplit_once('/').ok_or_else(malformed)?;
    let stem = page.strip_suffix("-Stats").ok_or_else(malformed)?;
    if stem.is_empty() {
        return Err(malformed());
    }

    Ok(format!("{}/schedule/{}-Scores-and-Fixtures", dir, stem))
}
