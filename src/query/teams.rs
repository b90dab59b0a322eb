use crate::catalog::Competition;
use crate::extract::{extract_standings, extract_team_detail};
use crate::model::{TeamDetail, TeamSummary};
use crate::query::{Fbref, Preconditions};
use crate::{FbrefError, Result};
use std::collections::BTreeMap;

impl Fbref {
    /// Standings of the season just ended and the season just starting,
    /// keyed by team name
    ///
    /// Teams listed in both carry the starting season's record as
    /// `previous_season`; teams listed in only one table have none.
    pub async fn teams_info(&self, competition: &str) -> Result<BTreeMap<String, TeamSummary>> {
        let entry = self.guard(competition, None)?;
        self.standings_map(entry).await
    }

    /// One team's standing with every squad-page table, for both seasons
    pub async fn team_infos(&self, team: &str, competition: &str) -> Result<TeamSummary> {
        let entry = self.check(competition, Preconditions::default().for_team(team))?;
        self.team_summary(entry, team).await
    }

    /// Full team lookup for an already checked competition
    pub(crate) async fn team_summary(
        &self,
        entry: &Competition,
        team: &str,
    ) -> Result<TeamSummary> {
        let mut teams = self.standings_map(entry).await?;
        let mut summary = teams.remove(team).ok_or_else(|| FbrefError::InvalidTeam {
            team: team.to_string(),
            valid: teams.keys().cloned().collect(),
        })?;

        tracing::info!("Fetching squad pages of {}", team);
        let current = self.team_detail(&summary).await?;
        summary.details = Some(Box::new(current));
        if let Some(previous) = summary.previous_season.as_mut() {
            let detail = self.team_detail(previous).await?;
            previous.details = Some(Box::new(detail));
        }

        Ok(summary)
    }

    async fn standings_map(&self, entry: &Competition) -> Result<BTreeMap<String, TeamSummary>> {
        let ending = format!("{}-{}", self.current_year - 1, self.current_year);
        let starting = format!("{}-{}", self.current_year, self.current_year + 1);
        tracing::info!("Fetching {} standings for {} and {}", entry.name, ending, starting);

        let index = self.season_index(entry).await?;
        let ending_url = Self::season_url(&index, &ending)?;
        let starting_url = Self::season_url(&index, &starting)?;

        let ending_rows = self.standings(&ending_url, &ending).await?;
        let mut starting_rows: BTreeMap<String, TeamSummary> = self
            .standings(&starting_url, &starting)
            .await?
            .into_iter()
            .map(|summary| (summary.team.clone(), summary))
            .collect();

        let mut teams = BTreeMap::new();
        for mut summary in ending_rows {
            summary.previous_season = starting_rows.remove(&summary.team).map(Box::new);
            teams.insert(summary.team.clone(), summary);
        }

        // Promoted teams only appear in the starting season
        tracing::debug!("{} teams only in {}", starting_rows.len(), starting);
        teams.extend(starting_rows);

        Ok(teams)
    }

    async fn standings(&self, url: &str, season: &str) -> Result<Vec<TeamSummary>> {
        let raw = self.fetch(url).await?;
        let page = raw.parse();
        extract_standings(&page, season)
    }

    async fn team_detail(&self, summary: &TeamSummary) -> Result<TeamDetail> {
        let url = summary.url.as_deref().ok_or_else(|| FbrefError::MissingTable {
            url: format!("{} standings", summary.season),
            context: format!("squad link for {}", summary.team),
        })?;

        let raw = self.fetch(url).await?;
        let page = raw.parse();
        extract_team_detail(&page)
    }
}
