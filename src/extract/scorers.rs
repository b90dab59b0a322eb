use crate::extract::{cell_by_stat, css, first_link, non_empty, row_cells, text_of, Page};
use crate::model::{ScoutingStat, TopScorerEntry, UNKNOWN_CLUB};
use crate::Result;
use regex::Regex;
use scraper::ElementRef;
use std::collections::BTreeMap;

/// Key of one season in the top-scorer mapping
pub fn top_scorer_key(competition: &str, season: &str) -> String {
    format!("{} season {}", competition, season)
}

/// Extracts each season's leading scorer from a competition history page
///
/// Rows whose scorer cell holds no player link produce no entry.
pub fn extract_top_scorers(
    page: &Page,
    competition: &str,
) -> Result<BTreeMap<String, TopScorerEntry>> {
    let row_selector = css("tr")?;
    let mut scorers = BTreeMap::new();

    for row in page.select(&row_selector) {
        let Some(season_cell) = cell_by_stat(&row, "year_id") else {
            continue;
        };
        let Some(scorer_cell) = cell_by_stat(&row, "top_scorers") else {
            continue;
        };
        let season = text_of(&season_cell);
        if season.is_empty() {
            continue;
        }

        match parse_scorer_cell(&season, &scorer_cell) {
            Some(entry) => {
                scorers.insert(top_scorer_key(competition, &season), entry);
            }
            None => tracing::trace!("No top scorer listed for {}", season),
        }
    }

    tracing::debug!("{} seasons with a top scorer on {}", scorers.len(), page.url());
    Ok(scorers)
}

/// Parses "Player (Club) - 27" style cells; the player must be a link
fn parse_scorer_cell(season: &str, cell: &ElementRef) -> Option<TopScorerEntry> {
    let link = first_link(cell)?;
    let player = text_of(&link);
    let player_url = link.value().attr("href")?.to_string();
    if player.is_empty() {
        return None;
    }

    let text = text_of(cell);
    let goals = text
        .rsplit_once('-')
        .and_then(|(_, count)| count.trim().parse::<u32>().ok());

    let club = parse_club(&text).unwrap_or_else(|| UNKNOWN_CLUB.to_string());

    Some(TopScorerEntry {
        season: season.to_string(),
        player,
        goals,
        player_url,
        club,
    })
}

/// Text between the first pair of parentheses
fn parse_club(text: &str) -> Option<String> {
    let (_, rest) = text.split_once('(')?;
    let (club, _) = rest.split_once(')')?;
    non_empty(club.trim().to_string())
}

/// Extracts the scouting summary of a player profile page
///
/// The forward (`FW`) summary is preferred; otherwise the first scouting
/// summary on the page is used. Header and spacer rows are skipped.
pub fn extract_scouting_summary(page: &Page) -> Result<Vec<ScoutingStat>> {
    let forward = Regex::new("^scout_summary_FW")?;
    let any_position = Regex::new("^scout_summary_")?;
    let row_selector = css("tr")?;

    let table = match page.find_table(&forward, "stats_table") {
        Some(table) => table,
        None => page.require_table(&any_position, "stats_table", "scouting summary table")?,
    };

    let mut stats = Vec::new();
    for row in table.select(&row_selector) {
        let cells = row_cells(&row);
        if cells.iter().all(|cell| cell.value().name() == "th") {
            continue;
        }

        let Some(statistic) = cell_by_stat(&row, "statistic")
            .map(|cell| text_of(&cell))
            .and_then(non_empty)
        else {
            continue;
        };

        stats.push(ScoutingStat {
            statistic,
            per90: cell_by_stat(&row, "per90")
                .map(|cell| text_of(&cell))
                .and_then(non_empty),
            percentile: cell_by_stat(&row, "percentile")
                .map(|cell| text_of(&cell))
                .and_then(non_empty),
        });
    }

    tracing::debug!("{} scouting lines on {}", stats.len(), page.url());
    Ok(stats)
}
