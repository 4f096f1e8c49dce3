use axum::{extract::State, Json};
use tracing::{info, instrument};

use super::{FunFacts, GameResult, LeaderboardEntry, SyncOutcome};
use crate::shared::{AppError, AppState};

/// GET /games
#[instrument(name = "list_games", skip(state))]
pub async fn list_games(State(state): State<AppState>) -> Result<Json<Vec<GameResult>>, AppError> {
    let games = state.stats_service.games().await?;
    info!(game_count = games.len(), "Games listed");
    Ok(Json(games))
}

/// GET /leaderboard
#[instrument(name = "leaderboard", skip(state))]
pub async fn leaderboard(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeaderboardEntry>>, AppError> {
    Ok(Json(state.stats_service.leaderboard().await?))
}

/// GET /fun-facts
#[instrument(name = "fun_facts", skip(state))]
pub async fn fun_facts(State(state): State<AppState>) -> Result<Json<FunFacts>, AppError> {
    Ok(Json(state.stats_service.fun_facts().await?))
}

/// POST /games/sync
///
/// Loads the games saved under the current email and merges them into the
/// session. Requires an email to be set.
#[instrument(name = "sync_games", skip(state))]
pub async fn sync_games(State(state): State<AppState>) -> Result<Json<SyncOutcome>, AppError> {
    let email = state
        .session_service
        .email()
        .await?
        .ok_or_else(|| AppError::BadRequest("Set an email before syncing".to_string()))?;

    let outcome = state.stats_service.sync_from_cloud(&email).await?;
    Ok(Json(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_utils::AppStateBuilder;
    use crate::stats::{FixedClock, InMemoryGameResultRepository, StatsService};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::{get, post},
        Router,
    };
    use chrono::{Duration, TimeZone, Utc};
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use tower::ServiceExt; // for `oneshot`

    fn app_with_games(games: Vec<GameResult>) -> Router {
        let now = Utc.with_ymd_and_hms(2024, 9, 23, 18, 0, 0).unwrap();
        let stats_service = StatsService::builder(Arc::new(
            InMemoryGameResultRepository::with_games(games),
        ))
        .with_clock(Arc::new(FixedClock(now)))
        .build();
        let app_state = AppStateBuilder::new()
            .with_stats_service(Arc::new(stats_service))
            .build();

        Router::new()
            .route("/games", get(list_games))
            .route("/games/sync", post(sync_games))
            .route("/leaderboard", get(leaderboard))
            .route("/fun-facts", get(fun_facts))
            .with_state(app_state)
    }

    fn game(id: &str, winner: &str, reverse_count: u32, uno: (&str, u32)) -> GameResult {
        let start = Utc.with_ymd_and_hms(2024, 9, 23, 15, 0, 0).unwrap();
        GameResult {
            id: id.to_string(),
            start_time: start,
            end_time: start + Duration::minutes(10),
            winner: winner.to_string(),
            players: vec!["A".to_string(), "B".to_string()],
            reverse_count,
            uno_declarations: BTreeMap::from([(uno.0.to_string(), uno.1)]),
        }
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_leaderboard_handler() {
        let app = app_with_games(vec![
            game("g1", "A", 2, ("A", 1)),
            game("g2", "B", 4, ("B", 2)),
        ]);

        let (status, body) = get_json(app, "/leaderboard").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!([
                { "name": "A", "wins": 1, "losses": 1, "avg": "0.500" },
                { "name": "B", "wins": 1, "losses": 1, "avg": "0.500" }
            ])
        );
    }

    #[tokio::test]
    async fn test_fun_facts_handler() {
        let app = app_with_games(vec![
            game("g1", "A", 2, ("A", 1)),
            game("g2", "B", 4, ("B", 2)),
        ]);

        let (status, body) = get_json(app, "/fun-facts").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalGames"], 2);
        assert_eq!(body["totalReverses"], 6);
        assert_eq!(body["averageReversesPerGame"], 3.0);
        assert_eq!(body["totalUnoDeclarations"], 3);
        assert_eq!(body["highestReversesInGame"], 4);
        assert_eq!(body["lastPlayed"], "3 hours ago");
    }

    #[tokio::test]
    async fn test_fun_facts_handler_empty() {
        let (status, body) = get_json(app_with_games(vec![]), "/fun-facts").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalGames"], 0);
        assert_eq!(body["lastPlayed"], "n/a");
        assert_eq!(body["averageGameDuration"], "n/a");
    }

    #[tokio::test]
    async fn test_list_games_handler() {
        let (status, body) =
            get_json(app_with_games(vec![game("g1", "A", 0, ("A", 0))]), "/games").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["id"], "g1");
        assert_eq!(body[0]["startTime"], "2024-09-23T15:00:00Z");
    }

    #[tokio::test]
    async fn test_sync_without_email_is_bad_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/games/sync")
            .body(Body::empty())
            .unwrap();

        let response = app_with_games(vec![]).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
