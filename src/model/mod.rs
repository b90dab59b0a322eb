//! Typed records produced by the extractors
//!
//! Every optional field is `None` exactly when the originating cell or element
//! was absent or empty; extractors never substitute guessed values (the one
//! exception is [`TopScorerEntry::club`], which falls back to `"Unknown"`).

mod fixture;
mod scorer;
mod team;

pub use fixture::{split_score, Fixture, RowKind, Score};
pub use scorer::{ScoutingStat, TopScorerDetail, TopScorerEntry, UNKNOWN_CLUB};
pub use team::{SeasonRecord, TeamDetail, TeamSummary};
