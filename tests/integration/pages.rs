//! Synthetic pages shaped like the site's markup

pub const HISTORY_PATH: &str = "/en/comps/11/history/Serie-A-Seasons";
pub const SEASON_2324_PATH: &str = "/en/comps/11/2023-2024/2023-2024-Serie-A-Stats";
pub const SEASON_2425_PATH: &str = "/en/comps/11/2024-2025/2024-2025-Serie-A-Stats";
pub const SCHEDULE_2324_PATH: &str =
    "/en/comps/11/2023-2024/schedule/2023-2024-Serie-A-Scores-and-Fixtures";
pub const SCORER_PATH: &str = "/en/players/d70ce98e/Lautaro-Martinez";

pub const HISTORY: &str = r#"<html><body>
<table id="seasons" class="stats_table sortable">
  <thead><tr>
    <th data-stat="year_id" class="poptip sort_default_asc left">Season</th>
    <th data-stat="competition_name" class="poptip">Competition Name</th>
    <th data-stat="top_scorers" class="poptip">Top Scorer</th>
  </tr></thead>
  <tbody>
    <tr><th data-stat="year_id" class="left "><a href="/en/comps/11/2024-2025/2024-2025-Serie-A-Stats">2024-2025</a></th>
        <td data-stat="competition_name">Serie A</td><td data-stat="top_scorers"></td></tr>
    <tr><th data-stat="year_id" class="left "><a href="/en/comps/11/2023-2024/2023-2024-Serie-A-Stats">2023-2024</a></th>
        <td data-stat="competition_name">Serie A</td>
        <td data-stat="top_scorers"><a href="/en/players/d70ce98e/Lautaro-Martinez">Lautaro Martínez</a> (Inter) - 24</td></tr>
    <tr><th data-stat="year_id" class="left "><a href="/en/comps/11/2022-2023/2022-2023-Serie-A-Stats">2022-2023</a></th>
        <td data-stat="competition_name">Serie A</td>
        <td data-stat="top_scorers"><a href="/en/players/8e92be30/Victor-Osimhen">Victor Osimhen</a> - 26</td></tr>
  </tbody>
</table>
</body></html>"#;

fn standings_row(rank: usize, team: &str, season: &str, games: u32, points: u32) -> String {
    format!(
        r#"<tr><th data-stat="rank">{rank}</th>
           <td data-stat="team"><img class="teamlogo" src="https://cdn.ssref.net/{team}.png"><a href="/en/squads/{team}/{season}/{team}-Stats">{team}</a></td>
           <td data-stat="games">{games}</td><td data-stat="points">{points}</td></tr>"#
    )
}

fn season_page(season: &str, teams: &[(&str, u32, u32)]) -> String {
    let rows: String = teams
        .iter()
        .enumerate()
        .map(|(i, (team, games, points))| standings_row(i + 1, team, season, *games, *points))
        .collect();

    format!(
        r#"<html><body>
<div id="info"><div id="meta">
  <div class="media-item logo"><img class="teamlogo" src="https://cdn.ssref.net/req/1/tlogo/fb/11.png"></div>
  <div>
    <h1>{season} Serie A Stats</h1>
    <p><strong>Governing Country</strong>: <a href="/en/country/ITA/Italy-Football">Italy</a></p>
    <p><strong>Level</strong>: <span>1</span></p>
  </div>
</div></div>
<div id="all_results{season}111">
<table id="results{season}111_overall" class="stats_table sortable">
  <thead><tr>
    <th data-stat="rank">Rk</th><th data-stat="team">Squad</th>
    <th data-stat="games">MP</th><th data-stat="points">Pts</th>
  </tr></thead>
  <tbody>{rows}</tbody>
</table>
</div>
</body></html>"#
    )
}

/// Inter and Milan play both seasons; Frosinone only the ending one
pub fn season_2324() -> String {
    season_page("2023-2024", &[("Inter", 38, 94), ("Milan", 38, 75), ("Frosinone", 38, 35)])
}

/// Como is promoted into the starting season
pub fn season_2425() -> String {
    season_page("2024-2025", &[("Inter", 2, 4), ("Como", 2, 1), ("Milan", 2, 2)])
}

pub const SCHEDULE_2324: &str = r#"<html><body>
<table id="sched_2023-2024_11_1" class="stats_table sortable">
  <thead><tr><th data-stat="gameweek">Wk</th><th data-stat="date">Date</th><th data-stat="score">Score</th></tr></thead>
  <tbody>
    <tr>
      <th data-stat="gameweek">4</th><td data-stat="dayofweek">Sat</td>
      <td data-stat="date"><a href="/en/matches/2023-09-16">2023-09-16</a></td>
      <td data-stat="start_time"><span class="venuetime">18:00</span></td>
      <td data-stat="home_team"><a href="/en/squads/Inter/Inter-Stats">Inter</a></td>
      <td data-stat="home_xg">2.8</td>
      <td data-stat="score"><a href="/en/matches/a1/Inter-Milan">5&ndash;1</a></td>
      <td data-stat="away_xg">0.6</td>
      <td data-stat="away_team"><a href="/en/squads/Milan/Milan-Stats">Milan</a></td>
      <td data-stat="attendance">75,600</td><td data-stat="venue">Stadio Giuseppe Meazza</td>
      <td data-stat="referee">Davide Massa</td>
      <td data-stat="match_report"><a href="/en/matches/a1/Inter-Milan">Match Report</a></td>
    </tr>
    <tr class="spacer partial_table"><td colspan="13"></td></tr>
    <tr>
      <th data-stat="gameweek">17</th><td data-stat="dayofweek">Sat</td>
      <td data-stat="date">2023-12-23</td>
      <td data-stat="start_time">12:30</td>
      <td data-stat="home_team"><a href="/en/squads/Frosinone/Frosinone-Stats">Frosinone</a></td>
      <td data-stat="home_xg">0.4</td>
      <td data-stat="score"><a href="/en/matches/b2/Frosinone-Inter">0&ndash;2</a></td>
      <td data-stat="away_xg">1.9</td>
      <td data-stat="away_team"><a href="/en/squads/Inter/Inter-Stats">Inter</a></td>
      <td data-stat="attendance">15,100</td><td data-stat="venue">Stadio Benito Stirpe</td>
      <td data-stat="referee">Marco Di Bello</td>
      <td data-stat="match_report"><a href="/en/matches/b2/Frosinone-Inter">Match Report</a></td>
    </tr>
    <tr>
      <th data-stat="gameweek">38</th><td data-stat="dayofweek">Sat</td>
      <td data-stat="date">2024-05-25</td>
      <td data-stat="start_time">20:45</td>
      <td data-stat="home_team"><a href="/en/squads/Milan/Milan-Stats">Milan</a></td>
      <td data-stat="home_xg"></td><td data-stat="score"></td><td data-stat="away_xg"></td>
      <td data-stat="away_team"><a href="/en/squads/Frosinone/Frosinone-Stats">Frosinone</a></td>
      <td data-stat="attendance"></td><td data-stat="venue">Stadio Giuseppe Meazza</td>
      <td data-stat="referee"></td>
      <td data-stat="match_report"><a href="/en/stathead/matchup/teams/Milan/Frosinone">Head-to-Head</a></td>
    </tr>
    <tr>
      <th data-stat="gameweek">38</th><td data-stat="date">2024-05-25</td>
      <td data-stat="home_team">Lazio</td><td data-stat="away_team">Genoa</td>
      <td data-stat="notes">Match Postponed</td><td data-stat="match_report"></td>
    </tr>
  </tbody>
</table>
</body></html>"#;

pub const SCORER: &str = r#"<html><body>
<div id="all_scout_summary">
<!--
  <table id="scout_summary_FW" class="stats_table">
    <thead><tr><th data-stat="statistic">Statistic</th><th data-stat="per90">Per 90</th><th data-stat="percentile">Percentile</th></tr></thead>
    <tbody>
      <tr><th data-stat="statistic">Non-Penalty Goals</th><td data-stat="per90">0.71</td><td data-stat="percentile">99</td></tr>
      <tr><th data-stat="statistic">Shots Total</th><td data-stat="per90">3.86</td><td data-stat="percentile">94</td></tr>
    </tbody>
  </table>
-->
</div>
</body></html>"#;

fn stats_table(id: &str, header: &str, body: &str) -> String {
    format!(
        r#"<table id="{id}" class="stats_table sortable"><thead><tr class="over_header"><th colspan="2">Group</th></tr><tr>{header}</tr></thead><tbody>{body}</tbody></table>"#
    )
}

/// Squad page with the roster live and every other table commented out
pub fn squad() -> String {
    let roster = stats_table(
        "stats_standard_11",
        r#"<th data-stat="player">Player</th><th data-stat="position">Pos</th>"#,
        r#"<tr><th data-stat="player"><a href="/en/players/1/Yann-Sommer">Yann Sommer</a></th><td>GK</td></tr>
           <tr><th data-stat="player"><a href="/en/players/2/Marcus-Thuram">Marcus Thuram</a></th><td>FW</td></tr>"#,
    );
    let simple = |id: &str| {
        stats_table(
            id,
            r#"<th data-stat="player">Player</th><th>90s</th>"#,
            r#"<tr><th data-stat="player">Yann Sommer</th><td>34.0</td></tr>"#,
        )
    };

    format!(
        "<html><body>{roster}<!-- {} {} {} {} {} {} {} {} --></body></html>",
        simple("matchlogs_for"),
        simple("stats_keeper_11"),
        simple("stats_passing_11"),
        simple("stats_passing_types_11"),
        simple("stats_shooting_11"),
        simple("stats_gca_11"),
        simple("stats_defense_11"),
        simple("stats_possession_11"),
    )
}
