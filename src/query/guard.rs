use crate::catalog::Competition;
use crate::query::Fbref;
use crate::{FbrefError, Result};
use chrono::NaiveDate;

/// Arguments an operation validates alongside its competition
#[derive(Debug, Clone, Copy, Default)]
pub struct Preconditions<'a> {
    pub season: Option<&'a str>,
    pub date: Option<&'a str>,
    pub team: Option<&'a str>,
}

impl<'a> Preconditions<'a> {
    pub fn season(season: &'a str) -> Self {
        Self {
            season: Some(season),
            ..Self::default()
        }
    }

    pub fn on_date(mut self, date: &'a str) -> Self {
        self.date = Some(date);
        self
    }

    pub fn for_team(mut self, team: &'a str) -> Self {
        self.team = Some(team);
        self
    }
}

impl Fbref {
    /// Precondition check for operations taking a competition and a season
    ///
    /// # Order
    ///
    /// 1. The competition must be an exact catalog key → `InvalidCompetition`
    /// 2. The season, when given, must be `YYYY-YYYY` (or `YYYY` for
    ///    calendar-year competitions) → `MalformedInput`
    /// 3. Its trailing year must not exceed the current year → `InvalidYear`
    pub fn guard(&self, competition: &str, season: Option<&str>) -> Result<&Competition> {
        self.check(
            competition,
            Preconditions {
                season,
                ..Preconditions::default()
            },
        )
    }

    /// Single precondition check run before any request of an operation
    ///
    /// Runs the [`Fbref::guard`] steps, then:
    ///
    /// 4. The date, when given, must be `YYYY-MM-DD` → `MalformedInput`
    /// 5. The team name, when given, must not be blank → `MalformedInput`
    pub fn check(&self, competition: &str, args: Preconditions<'_>) -> Result<&Competition> {
        let entry = self
            .catalog
            .get(competition)
            .ok_or_else(|| FbrefError::InvalidCompetition {
                name: competition.to_string(),
                valid: self.catalog.names(),
            })?;

        if let Some(season) = args.season {
            let (_, end) = parse_season(season)?;
            if end > self.current_year {
                return Err(FbrefError::InvalidYear {
                    season: season.to_string(),
                    current_year: self.current_year,
                });
            }
        }

        if let Some(date) = args.date {
            validate_date(date)?;
        }
        if let Some(team) = args.team {
            require_name("team", team)?;
        }

        Ok(entry)
    }
}

/// Parses a season label into its (first, trailing) years
pub fn parse_season(season: &str) -> Result<(i32, i32)> {
    let malformed = || {
        FbrefError::MalformedInput(format!(
            "season '{}' must look like YYYY-YYYY",
            season
        ))
    };

    let year = |part: &str| -> Result<i32> {
        if part.len() == 4 && part.chars().all(|c| c.is_ascii_digit()) {
            part.parse::<i32>().map_err(|_| malformed())
        } else {
            Err(malformed())
        }
    };

    match season.split_once('-') {
        Some((start, end)) => Ok((year(start)?, year(end)?)),
        None => {
            let single = year(season)?;
            Ok((single, single))
        }
    }
}

/// Checks that a match date is `YYYY-MM-DD`
pub fn validate_date(date: &str) -> Result<()> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| {
            FbrefError::MalformedInput(format!("date '{}' must look like YYYY-MM-DD", date))
        })
}

/// Rejects blank names
fn require_name(kind: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FbrefError::MalformedInput(format!("{} name cannot be empty", kind)));
    }
    Ok(())
}
