use crate::extract::{
    css, first_link, is_filler_row, row_cells, text_of, CellValue, HeaderIndex, Page,
};
use crate::model::{SeasonRecord, TeamSummary};
use crate::Result;
use regex::Regex;
use scraper::ElementRef;

/// Header keys per field: the `data-stat` name first, then the visible label
mod keys {
    pub const TEAM: &[&str] = &["team", "squad", "Squad"];
    pub const GAMES: &[&str] = &["games", "MP"];
    pub const WINS: &[&str] = &["wins", "W"];
    pub const DRAWS: &[&str] = &["ties", "draws", "D"];
    pub const LOSSES: &[&str] = &["losses", "L"];
    pub const GOALS_FOR: &[&str] = &["goals_for", "GF"];
    pub const GOALS_AGAINST: &[&str] = &["goals_against", "GA"];
    pub const GOAL_DIFF: &[&str] = &["goal_diff", "GD"];
    pub const POINTS: &[&str] = &["points", "Pts"];
    pub const POINTS_PER_GAME: &[&str] = &["points_avg", "Pts/MP"];
    pub const XG_FOR: &[&str] = &["xg_for", "xG"];
    pub const XG_AGAINST: &[&str] = &["xg_against", "xGA"];
    pub const XG_DIFF: &[&str] = &["xg_diff", "xGD"];
    pub const XG_DIFF_PER90: &[&str] = &["xg_diff_per90", "xGD/90"];
    pub const LAST_5: &[&str] = &["last_5", "Last 5"];
    pub const ATTENDANCE: &[&str] = &["attendance_per_g", "Attendance"];
    pub const TOP_SCORER: &[&str] = &["top_team_scorers", "Top Team Scorer"];
    pub const GOALKEEPER: &[&str] = &["top_keeper", "Goalkeeper"];
    pub const NOTES: &[&str] = &["notes", "Notes"];
}

/// Extracts the overall standings table of a season page
///
/// Fields are located by header label, so reordered or missing columns
/// never shift values into the wrong field; a column the table lacks yields
/// `Missing`. Rank is the 1-based row position.
pub fn extract_standings(page: &Page, season: &str) -> Result<Vec<TeamSummary>> {
    let pattern = Regex::new("^results.*_overall$")?;
    let table = page.require_table(&pattern, "stats_table", "standings table")?;

    let header = HeaderIndex::from_table(&table)?.unwrap_or_default();
    let team_col = header
        .position(keys::TEAM)
        .ok_or_else(|| page.missing("team column of the standings table"))?;

    let row_selector = css("tbody tr")?;
    let mut teams = Vec::new();

    for row in table.select(&row_selector) {
        if is_filler_row(&row) {
            continue;
        }
        let cells = row_cells(&row);
        let Some(team_cell) = cells.get(team_col) else {
            continue;
        };

        let link = first_link(team_cell);
        let team = match &link {
            Some(link) => text_of(link),
            None => text_of(team_cell),
        };
        if team.is_empty() {
            continue;
        }

        let value = |field: &[&str]| -> CellValue {
            header
                .position(field)
                .and_then(|col| cells.get(col))
                .map(|cell| CellValue::from_text(&text_of(cell)))
                .unwrap_or_default()
        };

        let logo_url = team_cell
            .descendants()
            .filter_map(ElementRef::wrap)
            .find(|e| e.value().name() == "img")
            .and_then(|img| img.value().attr("src"))
            .map(str::to_string);

        teams.push(TeamSummary {
            rank: teams.len() + 1,
            team,
            season: season.to_string(),
            logo_url,
            url: link
                .and_then(|link| link.value().attr("href"))
                .map(str::to_string),
            games: value(keys::GAMES),
            record: SeasonRecord {
                wins: value(keys::WINS),
                draws: value(keys::DRAWS),
                losses: value(keys::LOSSES),
                goals_for: value(keys::GOALS_FOR),
                goals_against: value(keys::GOALS_AGAINST),
                goal_diff: value(keys::GOAL_DIFF),
                points: value(keys::POINTS),
                points_per_game: value(keys::POINTS_PER_GAME),
                xg_for: value(keys::XG_FOR),
                xg_against: value(keys::XG_AGAINST),
                xg_diff: value(keys::XG_DIFF),
                xg_diff_per90: value(keys::XG_DIFF_PER90),
                last_5: value(keys::LAST_5),
                attendance: value(keys::ATTENDANCE),
                top_scorer: value(keys::TOP_SCORER),
                goalkeeper: value(keys::GOALKEEPER),
                notes: value(keys::NOTES),
            },
            details: None,
            previous_season: None,
        });
    }

    tracing::debug!("{} teams in {} standings", teams.len(), season);
    Ok(teams)
}
