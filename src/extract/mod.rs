//! Table extraction
//!
//! This module turns fetched pages into typed records:
//! - `page`: the parsed document, including tables shipped inside HTML comments
//! - `table`: generic table flattening into [`ExtractedTable`]
//! - one submodule per page family (season history, league metadata,
//!   top scorers, schedules, standings, squad pages)
//!
//! Extractors are synchronous and borrow the [`Page`]; nothing here performs I/O.

mod fixtures;
mod league;
mod page;
mod scorers;
mod seasons;
mod squad;
mod standings;
mod table;

pub use fixtures::{extract_fixtures, FixtureFilter};
pub use league::extract_league_info;
pub use page::Page;
pub use scorers::{extract_scouting_summary, extract_top_scorers, top_scorer_key};
pub use seasons::{extract_season_index, SeasonIndex};
pub use squad::{extract_team_detail, join_player_urls, player_links, PLAYER_URL_COLUMN};
pub use standings::extract_standings;
pub use table::{CellValue, ExtractedTable, HeaderIndex};

use crate::{FbrefError, Result};
use scraper::{ElementRef, Selector};

/// Parses a CSS selector, mapping failures into [`FbrefError::Selector`]
pub(crate) fn css(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| FbrefError::Selector(format!("{selector}: {e:?}")))
}

/// Visible text of an element with whitespace (including nbsp) collapsed
pub(crate) fn text_of(element: &ElementRef) -> String {
    element
        .text()
        .flat_map(|chunk| chunk.split(|c: char| c.is_whitespace() || c == '\u{a0}'))
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Direct `th`/`td` children of a table row, in document order
pub(crate) fn row_cells<'a>(row: &ElementRef<'a>) -> Vec<ElementRef<'a>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|cell| matches!(cell.value().name(), "th" | "td"))
        .collect()
}

/// The cell of a row carrying the given `data-stat` attribute
pub(crate) fn cell_by_stat<'a>(row: &ElementRef<'a>, stat: &str) -> Option<ElementRef<'a>> {
    row_cells(row)
        .into_iter()
        .find(|cell| cell.value().attr("data-stat") == Some(stat))
}

/// First `<a href>` inside an element
pub(crate) fn first_link<'a>(element: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    element
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == "a" && e.value().attr("href").is_some())
}

/// Rows that repeat the header or only separate groups
pub(crate) fn is_filler_row(row: &ElementRef) -> bool {
    row.value()
        .classes()
        .any(|class| matches!(class, "thead" | "over_header" | "spacer"))
}
