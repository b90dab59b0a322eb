use serde::Serialize;

/// Club placeholder when the scorer cell carries no club
pub const UNKNOWN_CLUB: &str = "Unknown";

/// Leading scorer of one season, from the competition history table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopScorerEntry {
    /// Season label, e.g. "2023-2024"
    pub season: String,

    pub player: String,

    /// League goals; `None` when the cell has no parsable count
    pub goals: Option<u32>,

    /// Relative link to the player's profile page
    pub player_url: String,

    pub club: String,
}

/// One line of a player's scouting summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoutingStat {
    pub statistic: String,
    pub per90: Option<String>,
    pub percentile: Option<String>,
}

/// A season's top scorer together with their scouting summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopScorerDetail {
    pub season: String,
    pub top_scorer: String,
    pub goals: Option<u32>,
    pub club: String,
    pub player_url: String,
    pub detailed_stats: Vec<ScoutingStat>,
}

impl TopScorerDetail {
    pub fn new(entry: TopScorerEntry, detailed_stats: Vec<ScoutingStat>) -> Self {
        Self {
            season: entry.season,
            top_scorer: entry.player,
            goals: entry.goals,
            club: entry.club,
            player_url: entry.player_url,
            detailed_stats,
        }
    }
}
