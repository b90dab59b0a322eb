use crate::model::TeamSummary;
use serde::Serialize;
use std::fmt;

/// Separator between home and away goals in a score cell (U+2013 EN DASH)
pub const SCORE_SEPARATOR: char = '\u{2013}';

/// Classification of a schedule row by its match-report link text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RowKind {
    /// Played match, links to a match report
    #[serde(rename = "Match Report")]
    MatchReport,
    /// Upcoming match, links to a head-to-head preview
    #[serde(rename = "Head-to-Head")]
    HeadToHead,
}

impl RowKind {
    /// Parses the link text of a schedule row's report cell
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Match Report" => Some(Self::MatchReport),
            "Head-to-Head" => Some(Self::HeadToHead),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::MatchReport => "Match Report",
            Self::HeadToHead => "Head-to-Head",
        }
    }
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Goals for each side; both `None` when the match has no recorded score
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    pub home: Option<String>,
    pub away: Option<String>,
}

impl Score {
    /// Builds a score from the text of a score cell's link
    pub fn from_cell_text(text: &str) -> Self {
        match split_score(text) {
            Some((home, away)) => Self {
                home: Some(home),
                away: Some(away),
            },
            None => Self::default(),
        }
    }

    pub fn is_missing(&self) -> bool {
        self.home.is_none() && self.away.is_none()
    }
}

/// Splits "H–A" into its two trimmed halves
///
/// Returns `None` unless the text splits on the en dash into exactly two
/// non-empty parts.
pub fn split_score(text: &str) -> Option<(String, String)> {
    let mut parts = text.split(SCORE_SEPARATOR);
    let home = parts.next()?.trim();
    let away = parts.next()?.trim();

    if parts.next().is_some() || home.is_empty() || away.is_empty() {
        return None;
    }

    Some((home.to_string(), away.to_string()))
}

/// One row of a season schedule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fixture {
    pub gameweek: Option<String>,
    pub weekday: Option<String>,
    pub date: Option<String>,
    pub kickoff: Option<String>,
    pub home_team: Option<String>,
    pub home_xg: Option<String>,
    pub score: Score,
    pub away_xg: Option<String>,
    pub away_team: Option<String>,
    pub attendance: Option<String>,
    pub venue: Option<String>,
    pub referee: Option<String>,

    /// Relative link to the match report or head-to-head page
    pub match_link: Option<String>,

    pub kind: RowKind,

    /// Filled in by the by-team queries only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_summary: Option<TeamSummary>,
}

impl Fixture {
    /// True if `team` is exactly the home or the away side
    pub fn involves(&self, team: &str) -> bool {
        self.home_team.as_deref() == Some(team) || self.away_team.as_deref() == Some(team)
    }
}
