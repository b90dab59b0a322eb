use crate::catalog::Competition;
use crate::extract::{extract_fixtures, FixtureFilter};
use crate::model::{Fixture, RowKind};
use crate::query::{Fbref, Preconditions};
use crate::url::schedule_url;
use crate::Result;

impl Fbref {
    /// Every match report and head-to-head row of a season
    pub async fn fixtures(&self, season: &str, competition: &str) -> Result<Vec<Fixture>> {
        let entry = self.guard(competition, Some(season))?;
        self.schedule(entry, season, FixtureFilter::all()).await
    }

    /// Played matches of a season
    pub async fn match_report(&self, season: &str, competition: &str) -> Result<Vec<Fixture>> {
        let entry = self.guard(competition, Some(season))?;
        self.schedule(entry, season, FixtureFilter::kind(RowKind::MatchReport))
            .await
    }

    /// Upcoming matches of a season
    pub async fn head_head(&self, season: &str, competition: &str) -> Result<Vec<Fixture>> {
        let entry = self.guard(competition, Some(season))?;
        self.schedule(entry, season, FixtureFilter::kind(RowKind::HeadToHead))
            .await
    }

    /// Fixtures played or scheduled on one date (`YYYY-MM-DD`)
    pub async fn matches(
        &self,
        date: &str,
        season: &str,
        competition: &str,
    ) -> Result<Vec<Fixture>> {
        let entry = self.check(competition, Preconditions::season(season).on_date(date))?;
        self.schedule(entry, season, FixtureFilter::all().on_date(date))
            .await
    }

    /// A team's fixtures, each enriched with the team's full summary
    pub async fn fixtures_by_team(
        &self,
        team: &str,
        season: &str,
        competition: &str,
    ) -> Result<Vec<Fixture>> {
        self.schedule_by_team(team, season, competition, FixtureFilter::all())
            .await
    }

    /// A team's played matches, each enriched with the team's full summary
    pub async fn match_report_by_team(
        &self,
        team: &str,
        season: &str,
        competition: &str,
    ) -> Result<Vec<Fixture>> {
        self.schedule_by_team(
            team,
            season,
            competition,
            FixtureFilter::kind(RowKind::MatchReport),
        )
        .await
    }

    /// A team's upcoming matches, each enriched with the team's full summary
    pub async fn head_head_by_team(
        &self,
        team: &str,
        season: &str,
        competition: &str,
    ) -> Result<Vec<Fixture>> {
        self.schedule_by_team(
            team,
            season,
            competition,
            FixtureFilter::kind(RowKind::HeadToHead),
        )
        .await
    }

    /// Shared routine of every schedule query; arguments are already checked
    async fn schedule(
        &self,
        entry: &Competition,
        season: &str,
        filter: FixtureFilter,
    ) -> Result<Vec<Fixture>> {
        tracing::info!("Fetching {} {} schedule ({:?})", entry.name, season, filter);

        let index = self.season_index(entry).await?;
        let season_page = Self::season_url(&index, season)?;
        let raw = self.fetch(&schedule_url(&season_page)?).await?;

        let page = raw.parse();
        let fixtures: Vec<Fixture> = extract_fixtures(&page)?
            .into_iter()
            .filter(|fixture| filter.matches(fixture))
            .collect();

        tracing::debug!("{} fixtures kept", fixtures.len());
        Ok(fixtures)
    }

    /// Team-restricted schedule; every matched row triggers a full team lookup
    async fn schedule_by_team(
        &self,
        team: &str,
        season: &str,
        competition: &str,
        filter: FixtureFilter,
    ) -> Result<Vec<Fixture>> {
        let entry = self.check(competition, Preconditions::season(season).for_team(team))?;
        let mut fixtures = self.schedule(entry, season, filter.with_team(team)).await?;

        for fixture in &mut fixtures {
            fixture.team_summary = Some(self.team_summary(entry, team).await?);
        }

        Ok(fixtures)
    }
}
