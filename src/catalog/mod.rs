//! Competition catalog
//!
//! Maps a competition's canonical display name to its season history page and
//! the alternative spellings a user may type. The catalog is read-only once
//! built and is shared by every query.

use crate::config::CompetitionEntry;

/// A competition tracked by the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Competition {
    /// Canonical name; the exact key queries are validated against
    pub name: String,

    /// Season history page, absolute or relative to the site root
    pub history_url: String,

    /// Accepted alternative spellings
    pub name_variants: Vec<String>,
}

/// Built-in competitions: (name, history path, variants)
const BUILTIN: &[(&str, &str, &[&str])] = &[
    (
        "Premier League",
        "/en/comps/9/history/Premier-League-Seasons",
        &["EPL", "Premier-League", "English Premier League"],
    ),
    (
        "La Liga",
        "/en/comps/12/history/La-Liga-Seasons",
        &["La-Liga", "LaLiga", "Liga"],
    ),
    (
        "Serie A",
        "/en/comps/11/history/Serie-A-Seasons",
        &["Serie-A", "Calcio"],
    ),
    (
        "Bundesliga",
        "/en/comps/20/history/Bundesliga-Seasons",
        &["Fussball-Bundesliga"],
    ),
    (
        "Ligue 1",
        "/en/comps/13/history/Ligue-1-Seasons",
        &["Ligue-1", "Ligue1"],
    ),
    (
        "Eredivisie",
        "/en/comps/23/history/Eredivisie-Seasons",
        &["Dutch Eredivisie"],
    ),
    (
        "Primeira Liga",
        "/en/comps/32/history/Primeira-Liga-Seasons",
        &["Primeira-Liga", "Liga Portugal"],
    ),
    (
        "Champions League",
        "/en/comps/8/history/Champions-League-Seasons",
        &["Champions-League", "UCL"],
    ),
    (
        "Europa League",
        "/en/comps/19/history/Europa-League-Seasons",
        &["Europa-League", "UEL"],
    ),
    (
        "Major League Soccer",
        "/en/comps/22/history/Major-League-Soccer-Seasons",
        &["MLS", "Major-League-Soccer"],
    ),
];

/// Read-only mapping from competition name to its catalog entry
#[derive(Debug, Clone)]
pub struct Catalog {
    competitions: Vec<Competition>,
}

impl Catalog {
    /// The built-in catalog of major competitions
    pub fn builtin() -> Self {
        let competitions = BUILTIN
            .iter()
            .map(|(name, history_url, variants)| Competition {
                name: name.to_string(),
                history_url: history_url.to_string(),
                name_variants: variants.iter().map(|v| v.to_string()).collect(),
            })
            .collect();

        Self { competitions }
    }

    /// Builds a catalog from configuration entries, keeping their order
    pub fn from_entries(entries: &[CompetitionEntry]) -> Self {
        let competitions = entries
            .iter()
            .map(|entry| Competition {
                name: entry.name.clone(),
                history_url: entry.history_url.clone(),
                name_variants: entry.name_variants.clone(),
            })
            .collect();

        Self { competitions }
    }

    /// Looks up a competition by its exact, case-sensitive name
    pub fn get(&self, name: &str) -> Option<&Competition> {
        self.competitions.iter().find(|c| c.name == name)
    }

    /// All valid competition names, in catalog order
    pub fn names(&self) -> Vec<String> {
        self.competitions.iter().map(|c| c.name.clone()).collect()
    }

    /// Resolves a user-typed name or variant to the canonical name
    ///
    /// Matching here is case-insensitive; queries themselves only accept the
    /// canonical name.
    pub fn canonical_name(&self, input: &str) -> Option<&str> {
        let input = input.trim();
        self.competitions
            .iter()
            .find(|c| {
                c.name.eq_ignore_ascii_case(input)
                    || c.name_variants.iter().any(|v| v.eq_ignore_ascii_case(input))
            })
            .map(|c| c.name.as_str())
    }

    /// Iterates over every competition
    pub fn iter(&self) -> impl Iterator<Item = &Competition> {
        self.competitions.iter()
    }

    pub fn len(&self) -> usize {
        self.competitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.competitions.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
