use axum::{extract::State, http::StatusCode, Json};
use tracing::{info, instrument, warn};

use super::{
    types::{DeclareUnoRequest, FinishGameRequest, StartGameRequest},
    GameInProgress,
};
use crate::shared::{AppError, AppState};
use crate::stats::RecordOutcome;

/// HTTP handler for starting a game
///
/// POST /play
#[instrument(name = "start_game", skip(state))]
pub async fn start_game(
    State(state): State<AppState>,
    Json(request): Json<StartGameRequest>,
) -> Result<Json<GameInProgress>, AppError> {
    let game = state.play_service.start(&request.players).await?;
    Ok(Json(game))
}

/// GET /play
pub async fn current_game(State(state): State<AppState>) -> Result<Json<GameInProgress>, AppError> {
    state
        .play_service
        .current()
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No game in progress".to_string()))
}

/// POST /play/reverse
#[instrument(name = "reverse", skip(state))]
pub async fn reverse(State(state): State<AppState>) -> Result<Json<GameInProgress>, AppError> {
    Ok(Json(state.play_service.reverse().await?))
}

/// POST /play/uno
#[instrument(name = "declare_uno", skip(state))]
pub async fn declare_uno(
    State(state): State<AppState>,
    Json(request): Json<DeclareUnoRequest>,
) -> Result<Json<GameInProgress>, AppError> {
    Ok(Json(state.play_service.declare_uno(&request.player).await?))
}

/// HTTP handler for finishing the game in progress
///
/// POST /play/finish
/// Records the result locally and saves it under the current email. A
/// failed save is reported in the response's `warning`, not as an error.
#[instrument(name = "finish_game", skip(state))]
pub async fn finish_game(
    State(state): State<AppState>,
    Json(request): Json<FinishGameRequest>,
) -> Result<Json<RecordOutcome>, AppError> {
    let result = state.play_service.finish(&request.winner).await?;
    let email = state.session_service.email_or_none().await;

    let outcome = state
        .stats_service
        .record_game(email.as_deref(), result)
        .await?;

    if let Some(warning) = &outcome.warning {
        warn!(%warning, "Game recorded with warning");
    } else {
        info!(game_id = %outcome.game.id, "Game recorded and saved");
    }

    Ok(Json(outcome))
}

/// DELETE /play
#[instrument(name = "abandon_game", skip(state))]
pub async fn abandon_game(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.play_service.abandon().await?;
    Ok(StatusCode::NO_CONTENT)
}
