use crate::extract::{CellValue, ExtractedTable};
use serde::Serialize;

/// Aggregate record of one team in one season's standings table
///
/// Values are carried verbatim from the table; a column the table does not
/// have is [`CellValue::Missing`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeasonRecord {
    pub wins: CellValue,
    pub draws: CellValue,
    pub losses: CellValue,
    pub goals_for: CellValue,
    pub goals_against: CellValue,
    pub goal_diff: CellValue,
    pub points: CellValue,
    pub points_per_game: CellValue,
    pub xg_for: CellValue,
    pub xg_against: CellValue,
    pub xg_diff: CellValue,
    pub xg_diff_per90: CellValue,
    pub last_5: CellValue,
    pub attendance: CellValue,
    pub top_scorer: CellValue,
    pub goalkeeper: CellValue,
    pub notes: CellValue,
}

/// Squad-page tables for one team in one season
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamDetail {
    /// Standard stats per player, joined with each player's profile URL
    pub roster: ExtractedTable,

    /// Results across every competition the team played
    pub competitions: ExtractedTable,

    pub goalkeeping: ExtractedTable,
    pub passing: ExtractedTable,
    pub passing_types: ExtractedTable,
    pub shooting: ExtractedTable,
    pub goal_shot_creation: ExtractedTable,
    pub defense: ExtractedTable,
    pub possession: ExtractedTable,
}

/// Standing and optional detail of one team in one season
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSummary {
    /// 1-based position in table row order
    pub rank: usize,

    pub team: String,

    /// Season label the record belongs to
    pub season: String,

    pub logo_url: Option<String>,

    /// Relative link to the team's season page
    pub url: Option<String>,

    pub games: CellValue,

    pub record: SeasonRecord,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Box<TeamDetail>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_season: Option<Box<TeamSummary>>,
}
