use crate::catalog::Competition;
use crate::extract::{
    extract_league_info, extract_scouting_summary, extract_season_index, extract_top_scorers,
    top_scorer_key, SeasonIndex,
};
use crate::model::{TopScorerDetail, TopScorerEntry};
use crate::query::Fbref;
use crate::{FbrefError, Result};
use std::collections::BTreeMap;

impl Fbref {
    /// Season label → relative season page URL for a competition
    ///
    /// Built fresh from the history page on every call.
    pub async fn valid_seasons(&self, competition: &str) -> Result<SeasonIndex> {
        let entry = self.guard(competition, None)?;
        tracing::info!("Resolving seasons of {}", entry.name);
        self.season_index(entry).await
    }

    pub(crate) async fn season_index(&self, entry: &Competition) -> Result<SeasonIndex> {
        let raw = self.fetch(&entry.history_url).await?;
        let page = raw.parse();
        extract_season_index(&page)
    }

    /// Relative URL of one season's page, or `InvalidSeason`
    pub(crate) fn season_url(index: &SeasonIndex, season: &str) -> Result<String> {
        index
            .get(season)
            .cloned()
            .ok_or_else(|| FbrefError::InvalidSeason {
                season: season.to_string(),
                available: index.keys().cloned().collect(),
            })
    }

    /// League metadata of one season ("Governing Country", "Champion", ...)
    pub async fn league_info(
        &self,
        season: &str,
        competition: &str,
    ) -> Result<BTreeMap<String, String>> {
        let entry = self.guard(competition, Some(season))?;
        tracing::info!("Fetching league info for {} {}", entry.name, season);

        let index = self.season_index(entry).await?;
        let url = Self::season_url(&index, season)?;
        let raw = self.fetch(&url).await?;

        let page = raw.parse();
        extract_league_info(&page)
    }

    /// Every season's top scorer, keyed by `"{competition} season {season}"`
    pub async fn top_scorers(&self, competition: &str) -> Result<BTreeMap<String, TopScorerEntry>> {
        let entry = self.guard(competition, None)?;
        self.scorers(entry).await
    }

    /// One season's top scorer with their scouting summary
    pub async fn top_scorer(&self, competition: &str, season: &str) -> Result<TopScorerDetail> {
        let competition = self.guard(competition, Some(season))?;

        let mut scorers = self.scorers(competition).await?;
        let key = top_scorer_key(&competition.name, season);
        let entry = scorers
            .remove(&key)
            .ok_or_else(|| FbrefError::InvalidSeason {
                season: key.clone(),
                available: scorers.keys().cloned().collect(),
            })?;

        tracing::info!("Fetching scouting report of {}", entry.player);
        let raw = self.fetch(&entry.player_url).await?;
        let stats = {
            let page = raw.parse();
            extract_scouting_summary(&page)?
        };

        Ok(TopScorerDetail::new(entry, stats))
    }

    async fn scorers(&self, entry: &Competition) -> Result<BTreeMap<String, TopScorerEntry>> {
        tracing::info!("Fetching top scorers of {}", entry.name);

        let raw = self.fetch(&entry.history_url).await?;
        let page = raw.parse();
        extract_top_scorers(&page, &entry.name)
    }
}
