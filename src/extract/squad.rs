use crate::extract::{
    cell_by_stat, css, first_link, is_filler_row, text_of, CellValue, ExtractedTable, Page,
};
use crate::model::TeamDetail;
use crate::Result;
use regex::Regex;
use scraper::ElementRef;

/// Class every squad statistics table carries
const STATS_CLASS: &str = "stats_table";

/// Label of the column joined onto the roster
pub const PLAYER_URL_COLUMN: &str = "Player URL";

/// Id patterns of the squad-page tables; the numeric suffix is the
/// competition id and varies between pages
mod patterns {
    pub const ROSTER: &str = r"^stats_standard_(\d+|combined)$";
    pub const COMPETITIONS: &str = r"^matchlogs_for";
    pub const GOALKEEPING: &str = r"^stats_keeper_(\d+|combined)$";
    pub const PASSING: &str = r"^stats_passing_(\d+|combined)$";
    pub const PASSING_TYPES: &str = r"^stats_passing_types_";
    pub const SHOOTING: &str = r"^stats_shooting_";
    pub const GOAL_SHOT_CREATION: &str = r"^stats_gca_";
    pub const DEFENSE: &str = r"^stats_defense_";
    pub const POSSESSION: &str = r"^stats_possession_";
}

/// Extracts every detail table of a team's season page
///
/// All tables are required; a missing one aborts the whole extraction.
pub fn extract_team_detail(page: &Page) -> Result<TeamDetail> {
    let detail = TeamDetail {
        roster: extract_roster(page)?,
        competitions: extract_table(page, patterns::COMPETITIONS, "scores and fixtures table")?,
        goalkeeping: extract_table(page, patterns::GOALKEEPING, "goalkeeping table")?,
        passing: extract_table(page, patterns::PASSING, "passing table")?,
        passing_types: extract_table(page, patterns::PASSING_TYPES, "pass types table")?,
        shooting: extract_table(page, patterns::SHOOTING, "shooting table")?,
        goal_shot_creation: extract_table(
            page,
            patterns::GOAL_SHOT_CREATION,
            "goal and shot creation table",
        )?,
        defense: extract_table(page, patterns::DEFENSE, "defensive actions table")?,
        possession: extract_table(page, patterns::POSSESSION, "possession table")?,
    };

    tracing::debug!(
        "Team page {}: {} players on the roster",
        page.url(),
        detail.roster.len()
    );
    Ok(detail)
}

fn find<'a>(page: &'a Page, pattern: &str, context: &str) -> Result<ElementRef<'a>> {
    let pattern = Regex::new(pattern)?;
    page.require_table(&pattern, STATS_CLASS, context)
}

fn extract_table(page: &Page, pattern: &str, context: &str) -> Result<ExtractedTable> {
    let table = find(page, pattern, context)?;
    ExtractedTable::from_element(&table)
}

/// Standard stats table joined with each player's profile URL
fn extract_roster(page: &Page) -> Result<ExtractedTable> {
    let table = find(page, patterns::ROSTER, "standard stats table")?;
    let links = player_links(&table)?;
    let roster = ExtractedTable::from_element(&table)?;
    Ok(join_player_urls(roster, &links))
}

/// (player name, profile href) for every linked player row of a table
pub fn player_links(table: &ElementRef) -> Result<Vec<(String, String)>> {
    let row_selector = css("tbody tr")?;
    let mut links = Vec::new();

    for row in table.select(&row_selector) {
        if is_filler_row(&row) {
            continue;
        }
        let Some(link) = cell_by_stat(&row, "player").and_then(|cell| first_link(&cell)) else {
            continue;
        };
        if let Some(href) = link.value().attr("href") {
            links.push((text_of(&link), href.to_string()));
        }
    }

    Ok(links)
}

/// Left-joins profile URLs onto a roster by player name
///
/// Names are the only join key the page offers. A roster row whose name
/// matches several links is emitted once per link, and a row with no link
/// keeps a `Missing` URL; players sharing a name therefore come out
/// duplicated.
pub fn join_player_urls(roster: ExtractedTable, links: &[(String, String)]) -> ExtractedTable {
    let Some(player_col) = roster.column_index("Player") else {
        tracing::warn!("Roster has no Player column; profile URLs not joined");
        return roster;
    };

    let mut columns = roster.columns;
    columns.push(PLAYER_URL_COLUMN.to_string());

    let mut rows = Vec::with_capacity(roster.rows.len());
    for row in roster.rows {
        let name = row.get(player_col).and_then(CellValue::as_str);
        let matches: Vec<&str> = links
            .iter()
            .filter(|(player, _)| Some(player.as_str()) == name)
            .map(|(_, href)| href.as_str())
            .collect();

        if matches.is_empty() {
            let mut row = row;
            row.push(CellValue::Missing);
            rows.push(row);
            continue;
        }

        for href in matches {
            let mut joined = row.clone();
            joined.push(CellValue::Url(href.to_string()));
            rows.push(joined);
        }
    }

    ExtractedTable { columns, rows }
}
