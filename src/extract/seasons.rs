use crate::extract::{css, first_link, text_of, Page};
use crate::Result;
use std::collections::BTreeMap;

/// Season label ("2023-2024") to the relative URL of that season's page
pub type SeasonIndex = BTreeMap<String, String>;

/// Extracts the season index from a competition history page
///
/// Season cells are header cells carrying both a `data-stat` marker and a
/// class attribute; only those holding a link are seasons. When two cells
/// share a label, the later one in document order wins.
pub fn extract_season_index(page: &Page) -> Result<SeasonIndex> {
    let selector = css("th[data-stat][class]")?;
    let mut index = SeasonIndex::new();

    for cell in page.select(&selector) {
        let Some(link) = first_link(&cell) else {
            continue;
        };
        let label = text_of(&link);
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        if label.is_empty() {
            continue;
        }

        if let Some(previous) = index.insert(label.clone(), href.to_string()) {
            tracing::trace!("Season {} seen twice; replacing {}", label, previous);
        }
    }

    if index.is_empty() {
        return Err(page.missing("season history table"));
    }

    tracing::debug!("{} seasons listed on {}", index.len(), page.url());
    Ok(index)
}
