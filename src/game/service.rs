use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use super::core::GameInProgress;
use crate::{
    setup::Roster,
    shared::AppError,
    stats::{Clock, GameResult, SystemClock},
};

/// Drives the single game the session is currently playing
pub struct PlayService {
    current: RwLock<Option<GameInProgress>>,
    clock: Arc<dyn Clock>,
}

impl Default for PlayService {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl PlayService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            current: RwLock::new(None),
            clock,
        }
    }

    /// Starts a game with the given players
    #[instrument(skip(self))]
    pub async fn start(&self, players: &[String]) -> Result<GameInProgress, AppError> {
        let roster = Roster::new(players)?;

        let mut current = self.current.write().await;
        if current.is_some() {
            return Err(AppError::Conflict(
                "A game is already in progress".to_string(),
            ));
        }

        let game = GameInProgress::start(roster, self.clock.now());
        info!(game_id = %game.id(), players = game.players().len(), "Game started");
        *current = Some(game.clone());
        Ok(game)
    }

    /// Get the game in progress, if any (read-only access)
    pub async fn current(&self) -> Option<GameInProgress> {
        self.current.read().await.clone()
    }

    #[instrument(skip(self))]
    pub async fn reverse(&self) -> Result<GameInProgress, AppError> {
        let mut current = self.current.write().await;
        let game = current.as_mut().ok_or_else(no_game)?;

        game.reverse();
        debug!(
            direction = %game.direction(),
            reverse_count = game.reverse_count(),
            "Direction reversed"
        );
        Ok(game.clone())
    }

    #[instrument(skip(self))]
    pub async fn declare_uno(&self, player: &str) -> Result<GameInProgress, AppError> {
        let mut current = self.current.write().await;
        let game = current.as_mut().ok_or_else(no_game)?;

        let count = game.declare_uno(player)?;
        debug!(player, count, "UNO declared");
        Ok(game.clone())
    }

    /// Ends the game in progress and returns its record.
    ///
    /// On an invalid winner the game stays in progress.
    #[instrument(skip(self))]
    pub async fn finish(&self, winner: &str) -> Result<GameResult, AppError> {
        let mut current = self.current.write().await;
        let game = current.as_ref().ok_or_else(no_game)?.clone();

        let result = game.finish(winner, self.clock.now())?;
        *current = None;

        info!(game_id = %result.id, winner = %result.winner, "Game finished");
        Ok(result)
    }

    /// Throws away the game in progress without recording it
    #[instrument(skip(self))]
    pub async fn abandon(&self) -> Result<(), AppError> {
        let mut current = self.current.write().await;
        let game = current.take().ok_or_else(no_game)?;
        info!(game_id = %game.id(), "Game abandoned");
        Ok(())
    }
}

fn no_game() -> AppError {
    AppError::NotFound("No game in progress".to_string())
}
