use crate::extract::{cell_by_stat, css, first_link, is_filler_row, non_empty, text_of, Page};
use crate::model::{Fixture, RowKind, Score};
use crate::Result;
use regex::Regex;
use scraper::ElementRef;

/// Row filter shared by every schedule query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureFilter {
    /// Restrict to one row kind; `None` keeps both kinds
    pub kind: Option<RowKind>,

    /// Exact match on the date cell text
    pub date: Option<String>,

    /// Exact match on the home or away team link text
    pub team: Option<String>,
}

impl FixtureFilter {
    /// Match reports and head-to-head rows alike
    pub fn all() -> Self {
        Self::default()
    }

    pub fn kind(kind: RowKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    pub fn on_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    pub fn matches(&self, fixture: &Fixture) -> bool {
        if self.kind.is_some_and(|kind| kind != fixture.kind) {
            return false;
        }
        if let Some(date) = &self.date {
            if fixture.date.as_deref() != Some(date.as_str()) {
                return false;
            }
        }
        if let Some(team) = &self.team {
            if !fixture.involves(team) {
                return false;
            }
        }
        true
    }
}

/// Extracts every classified row of a season's schedule table
///
/// Rows whose report cell is neither "Match Report" nor "Head-to-Head"
/// (postponed or cancelled matches, separators) are not returned.
pub fn extract_fixtures(page: &Page) -> Result<Vec<Fixture>> {
    let pattern = Regex::new("^sched_")?;
    let row_selector = css("tbody tr")?;
    let table = page.require_table(&pattern, "stats_table", "schedule table")?;

    let mut fixtures = Vec::new();
    for row in table.select(&row_selector) {
        if is_filler_row(&row) {
            continue;
        }
        match parse_fixture_row(&row) {
            Some(fixture) => fixtures.push(fixture),
            None => tracing::trace!("Skipping unclassified schedule row"),
        }
    }

    tracing::debug!("{} schedule rows on {}", fixtures.len(), page.url());
    Ok(fixtures)
}

fn parse_fixture_row(row: &ElementRef) -> Option<Fixture> {
    let report = cell_by_stat(row, "match_report")?;
    let kind = RowKind::from_label(&text_of(&report))?;

    let score = match cell_by_stat(row, "score").and_then(|cell| first_link(&cell)) {
        Some(link) => Score::from_cell_text(&text_of(&link)),
        None => Score::default(),
    };

    Some(Fixture {
        gameweek: stat_text(row, "gameweek"),
        weekday: stat_text(row, "dayofweek"),
        date: stat_text(row, "date"),
        kickoff: kickoff(row),
        home_team: team_name(row, "home_team"),
        home_xg: stat_text(row, "home_xg"),
        score,
        away_xg: stat_text(row, "away_xg"),
        away_team: team_name(row, "away_team"),
        attendance: stat_text(row, "attendance"),
        venue: stat_text(row, "venue"),
        referee: stat_text(row, "referee"),
        match_link: first_link(&report)
            .and_then(|link| link.value().attr("href"))
            .map(str::to_string),
        kind,
        team_summary: None,
    })
}

fn stat_text(row: &ElementRef, stat: &str) -> Option<String> {
    cell_by_stat(row, stat)
        .map(|cell| text_of(&cell))
        .and_then(non_empty)
}

/// Team link text, or the plain cell text for unlinked teams
fn team_name(row: &ElementRef, stat: &str) -> Option<String> {
    let cell = cell_by_stat(row, stat)?;
    let name = match first_link(&cell) {
        Some(link) => text_of(&link),
        None => text_of(&cell),
    };
    non_empty(name)
}

/// Venue-local kickoff time; the cell also carries the viewer's local time
fn kickoff(row: &ElementRef) -> Option<String> {
    let cell = cell_by_stat(row, "start_time")?;
    let venue_time = cell
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().classes().any(|c| c == "venuetime"));

    match venue_time {
        Some(span) => non_empty(text_of(&span)),
        None => non_empty(text_of(&cell)),
    }
}
