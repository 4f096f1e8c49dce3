use axum::{extract::State, Json};
use tracing::{info, instrument};

use super::previous_players;
use crate::shared::{AppError, AppState};

/// GET /players
///
/// Names of everyone who has played before, for picking a new game's roster
#[instrument(name = "list_players", skip(state))]
pub async fn list_players(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let games = state.stats_service.games().await?;
    let players = previous_players(&games);
    info!(player_count = players.len(), "Previous players listed");
    Ok(Json(players))
}
