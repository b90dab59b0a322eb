//! fbref-extract main entry point
//!
//! Command-line interface over the query facade. Every subcommand prints its
//! result as pretty JSON on stdout.

use clap::{Args, Parser, Subcommand};
use fbref_extract::config::{load_config, Config};
use fbref_extract::Fbref;
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// fbref-extract: football statistics from fbref.com as JSON
///
/// Fetches competition pages politely (one request per cooldown interval)
/// and turns their tables into structured records.
#[derive(Parser, Debug)]
#[command(name = "fbref-extract")]
#[command(version)]
#[command(about = "Football statistics from fbref.com as JSON", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in settings when omitted)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the seasons of a competition
    Seasons(CompetitionArgs),

    /// League metadata of one season
    LeagueInfo(SeasonArgs),

    /// Top scorer of every season
    TopScorers(CompetitionArgs),

    /// Top scorer of one season with their scouting summary
    TopScorer(SeasonArgs),

    /// Every fixture of a season
    Fixtures(SeasonArgs),

    /// Played matches of a season
    MatchReport(SeasonArgs),

    /// Upcoming matches of a season
    HeadHead(SeasonArgs),

    /// Fixtures on one date
    Matches {
        /// Match date (YYYY-MM-DD)
        date: String,

        #[command(flatten)]
        season: SeasonArgs,
    },

    /// A team's fixtures of a season
    FixturesByTeam(TeamSeasonArgs),

    /// A team's played matches of a season
    MatchReportByTeam(TeamSeasonArgs),

    /// A team's upcoming matches of a season
    HeadHeadByTeam(TeamSeasonArgs),

    /// Standings of the season just ended
    Teams(CompetitionArgs),

    /// One team's standing with every squad table
    Team {
        /// Team name as shown in the standings table
        team: String,

        #[command(flatten)]
        competition: CompetitionArgs,
    },
}

#[derive(Args, Debug)]
struct CompetitionArgs {
    /// Competition name ("Serie A", "premier league", ...)
    competition: String,
}

#[derive(Args, Debug)]
struct SeasonArgs {
    /// Competition name ("Serie A", "premier league", ...)
    competition: String,

    /// Season label ("2022-2023" or "2023")
    season: String,
}

#[derive(Args, Debug)]
struct TeamSeasonArgs {
    /// Team name as shown in the schedule table
    team: String,

    #[command(flatten)]
    season: SeasonArgs,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path).map_err(|e| {
                tracing::error!("Failed to load configuration: {}", e);
                e
            })?
        }
        None => Config::default(),
    };

    let fbref = Fbref::new(&config)?;

    match run(&fbref, cli.command).await {
        Ok(()) => {
            tracing::debug!("{} requests sent", fbref.fetcher().request_count());
            Ok(())
        }
        Err(e) => {
            tracing::error!("{}", e);
            Err(e)
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("fbref_extract=info,warn"),
            1 => EnvFilter::new("fbref_extract=debug,info"),
            2 => EnvFilter::new("fbref_extract=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Maps a user-typed competition name onto its catalog spelling
///
/// Unknown names pass through unchanged so the query reports them.
fn competition_name<'a>(fbref: &'a Fbref, input: &'a str) -> &'a str {
    fbref.catalog().canonical_name(input).unwrap_or(input)
}

async fn run(fbref: &Fbref, command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Seasons(args) => {
            print_json(&fbref.valid_seasons(competition_name(fbref, &args.competition)).await?)
        }
        Command::LeagueInfo(args) => {
            let name = competition_name(fbref, &args.competition);
            print_json(&fbref.league_info(&args.season, name).await?)
        }
        Command::TopScorers(args) => {
            print_json(&fbref.top_scorers(competition_name(fbref, &args.competition)).await?)
        }
        Command::TopScorer(args) => {
            let name = competition_name(fbref, &args.competition);
            print_json(&fbref.top_scorer(name, &args.season).await?)
        }
        Command::Fixtures(args) => {
            let name = competition_name(fbref, &args.competition);
            print_json(&fbref.fixtures(&args.season, name).await?)
        }
        Command::MatchReport(args) => {
            let name = competition_name(fbref, &args.competition);
            print_json(&fbref.match_report(&args.season, name).await?)
        }
        Command::HeadHead(args) => {
            let name = competition_name(fbref, &args.competition);
            print_json(&fbref.head_head(&args.season, name).await?)
        }
        Command::Matches { date, season } => {
            let name = competition_name(fbref, &season.competition);
            print_json(&fbref.matches(&date, &season.season, name).await?)
        }
        Command::FixturesByTeam(args) => {
            let name = competition_name(fbref, &args.season.competition);
            print_json(
                &fbref
                    .fixtures_by_team(&args.team, &args.season.season, name)
                    .await?,
            )
        }
        Command::MatchReportByTeam(args) => {
            let name = competition_name(fbref, &args.season.competition);
            print_json(
                &fbref
                    .match_report_by_team(&args.team, &args.season.season, name)
                    .await?,
            )
        }
        Command::HeadHeadByTeam(args) => {
            let name = competition_name(fbref, &args.season.competition);
            print_json(
                &fbref
                    .head_head_by_team(&args.team, &args.season.season, name)
                    .await?,
            )
        }
        Command::Teams(args) => {
            print_json(&fbref.teams_info(competition_name(fbref, &args.competition)).await?)
        }
        Command::Team { team, competition } => {
            let name = competition_name(fbref, &competition.competition);
            print_json(&fbref.team_infos(&team, name).await?)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
