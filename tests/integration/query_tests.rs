use crate::pages;
use crate::{create_client, mount_page, request_count};
use fbref_extract::{FbrefError, RowKind};
use wiremock::MockServer;

/// Serves the history, season and schedule pages of Serie A
async fn serie_a_server() -> MockServer {
    let server = MockServer::start().await;
    mount_page(&server, pages::HISTORY_PATH, pages::HISTORY).await;
    mount_page(&server, pages::SEASON_2324_PATH, pages::season_2324()).await;
    mount_page(&server, pages::SEASON_2425_PATH, pages::season_2425()).await;
    mount_page(&server, pages::SCHEDULE_2324_PATH, pages::SCHEDULE_2324).await;
    mount_page(&server, pages::SCORER_PATH, pages::SCORER).await;
    server
}

#[tokio::test]
async fn test_unknown_competition_makes_no_request() {
    let server = serie_a_server().await;
    let fbref = create_client(&server);

    match fbref.fixtures("2023-2024", "La-ligas").await {
        Err(FbrefError::InvalidCompetition { name, valid }) => {
            assert_eq!(name, "La-ligas");
            assert_eq!(valid, vec!["Serie A".to_string()]);
        }
        other => panic!("expected InvalidCompetition, got {:?}", other),
    }
    assert!(matches!(
        fbref.teams_info("La-ligas").await,
        Err(FbrefError::InvalidCompetition { .. })
    ));
    assert!(matches!(
        fbref.valid_seasons("serie a").await,
        Err(FbrefError::InvalidCompetition { .. })
    ));

    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn test_future_season_makes_no_request() {
    let server = serie_a_server().await;
    let fbref = create_client(&server);

    match fbref.league_info("2024-2025", "Serie A").await {
        Err(FbrefError::InvalidYear { season, current_year }) => {
            assert_eq!(season, "2024-2025");
            assert_eq!(current_year, 2024);
        }
        other => panic!("expected InvalidYear, got {:?}", other),
    }
    assert!(matches!(
        fbref.match_report("2030", "Serie A").await,
        Err(FbrefError::InvalidYear { .. })
    ));

    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn test_malformed_date_makes_no_request() {
    let server = serie_a_server().await;
    let fbref = create_client(&server);

    let result = fbref.matches("16/09/2023", "2023-2024", "Serie A").await;

    assert!(matches!(result, Err(FbrefError::MalformedInput(_))));
    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn test_competition_and_year_reported_before_bad_date() {
    let server = serie_a_server().await;
    let fbref = create_client(&server);

    assert!(matches!(
        fbref.matches("19/08/2023", "2023-2024", "La-ligas").await,
        Err(FbrefError::InvalidCompetition { .. })
    ));
    assert!(matches!(
        fbref.matches("19/08/2023", "2099-2100", "Serie A").await,
        Err(FbrefError::InvalidYear { .. })
    ));
    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn test_valid_seasons() {
    let server = serie_a_server().await;
    let fbref = create_client(&server);

    let seasons = fbref.valid_seasons("Serie A").await.unwrap();

    assert_eq!(
        seasons.keys().collect::<Vec<_>>(),
        vec!["2022-2023", "2023-2024", "2024-2025"]
    );
    assert_eq!(seasons["2023-2024"], pages::SEASON_2324_PATH);
}

#[tokio::test]
async fn test_unlisted_season() {
    let server = serie_a_server().await;
    let fbref = create_client(&server);

    match fbref.fixtures("1990-1991", "Serie A").await {
        Err(FbrefError::InvalidSeason { season, available }) => {
            assert_eq!(season, "1990-1991");
            assert_eq!(available.len(), 3);
        }
        other => panic!("expected InvalidSeason, got {:?}", other),
    }
}

#[tokio::test]
async fn test_league_info() {
    let server = serie_a_server().await;
    let fbref = create_client(&server);

    let info = fbref.league_info("2023-2024", "Serie A").await.unwrap();

    assert_eq!(info.get("Governing Country").map(String::as_str), Some("Italy"));
    assert_eq!(info.get("Level").map(String::as_str), Some("1"));
    assert_eq!(
        info.get("logo").map(String::as_str),
        Some("https://cdn.ssref.net/req/1/tlogo/fb/11.png")
    );
}

#[tokio::test]
async fn test_top_scorers() {
    let server = serie_a_server().await;
    let fbref = create_client(&server);

    let scorers = fbref.top_scorers("Serie A").await.unwrap();

    assert_eq!(scorers.len(), 2);
    let osimhen = &scorers["Serie A season 2022-2023"];
    assert_eq!(osimhen.player, "Victor Osimhen");
    assert_eq!(osimhen.goals, Some(26));
    assert_eq!(osimhen.club, "Unknown");
}

#[tokio::test]
async fn test_top_scorer_with_scouting_summary() {
    let server = serie_a_server().await;
    let fbref = create_client(&server);

    let detail = fbref.top_scorer("Serie A", "2023-2024").await.unwrap();

    assert_eq!(detail.top_scorer, "Lautaro Martínez");
    assert_eq!(detail.goals, Some(24));
    assert_eq!(detail.club, "Inter");
    assert_eq!(detail.player_url, pages::SCORER_PATH);
    assert_eq!(detail.detailed_stats.len(), 2);
    assert_eq!(detail.detailed_stats[0].statistic, "Non-Penalty Goals");
    assert_eq!(detail.detailed_stats[0].per90.as_deref(), Some("0.71"));

    // history page + player page
    assert_eq!(request_count(&server).await, 2);
}

#[tokio::test]
async fn test_top_scorer_missing_season() {
    let server = serie_a_server().await;
    let fbref = create_client(&server);

    // 2021-2022 is absent from the history page
    let result = fbref.top_scorer("Serie A", "2021-2022").await;

    assert!(matches!(result, Err(FbrefError::InvalidSeason { .. })));
}

#[tokio::test]
async fn test_fixtures_scores_are_paired() {
    let server = serie_a_server().await;
    let fbref = create_client(&server);

    let fixtures = fbref.fixtures("2023-2024", "Serie A").await.unwrap();

    // The postponed row carries no report label
    assert_eq!(fixtures.len(), 3);
    for fixture in &fixtures {
        assert_eq!(fixture.score.home.is_some(), fixture.score.away.is_some());
    }

    let derby = &fixtures[0];
    assert_eq!(derby.home_team.as_deref(), Some("Inter"));
    assert_eq!(derby.away_team.as_deref(), Some("Milan"));
    assert_eq!(derby.score.home.as_deref(), Some("5"));
    assert_eq!(derby.score.away.as_deref(), Some("1"));
    assert_eq!(derby.kickoff.as_deref(), Some("18:00"));

    assert!(fixtures[2].score.is_missing());
}

#[tokio::test]
async fn test_match_report_and_head_head_split() {
    let server = serie_a_server().await;
    let fbref = create_client(&server);

    let played = fbref.match_report("2023-2024", "Serie A").await.unwrap();
    let upcoming = fbref.head_head("2023-2024", "Serie A").await.unwrap();

    assert_eq!(played.len(), 2);
    assert!(played.iter().all(|f| f.kind == RowKind::MatchReport));
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].kind, RowKind::HeadToHead);
    assert_eq!(upcoming[0].home_team.as_deref(), Some("Milan"));
}

#[tokio::test]
async fn test_matches_on_date() {
    let server = serie_a_server().await;
    let fbref = create_client(&server);

    let on_day = fbref
        .matches("2023-12-23", "2023-2024", "Serie A")
        .await
        .unwrap();
    let empty_day = fbref
        .matches("2023-12-24", "2023-2024", "Serie A")
        .await
        .unwrap();

    assert_eq!(on_day.len(), 1);
    assert_eq!(on_day[0].home_team.as_deref(), Some("Frosinone"));
    assert!(empty_day.is_empty());
}
