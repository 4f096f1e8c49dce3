use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use super::{
    calculate_fun_facts, build_leaderboard, Clock, FunFacts, GameResult, GameResultRepository,
    LeaderboardEntry, StatsError, SystemClock,
};
use crate::cloud::{GameStore, InMemoryGameStore};

pub const DEFAULT_APP_NAME: &str = "tca-uno";

/// Result of recording a finished game.
///
/// The game is always kept locally; `warning` explains a failed cloud save.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordOutcome {
    pub game: GameResult,
    pub saved_to_cloud: bool,
    pub warning: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncOutcome {
    pub loaded: usize,
    pub added: usize,
    pub skipped: usize,
    pub warning: Option<String>,
}

/// Owns the session's game history and derives the leaderboard and fun facts from it
pub struct StatsService {
    repository: Arc<dyn GameResultRepository>,
    store: Arc<dyn GameStore>,
    clock: Arc<dyn Clock>,
    app_name: String,
}

impl StatsService {
    pub fn builder(repository: Arc<dyn GameResultRepository>) -> StatsServiceBuilder {
        StatsServiceBuilder::new(repository)
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub async fn games(&self) -> Result<Vec<GameResult>, StatsError> {
        self.repository.list().await
    }

    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, StatsError> {
        let games = self.repository.list().await?;
        Ok(build_leaderboard(&games))
    }

    pub async fn fun_facts(&self) -> Result<FunFacts, StatsError> {
        let games = self.repository.list().await?;
        Ok(calculate_fun_facts(&games, self.clock.now()))
    }

    /// Appends a finished game and mirrors it to cloud storage.
    ///
    /// Cloud failures never undo the local append.
    #[instrument(skip(self, game), fields(game_id = %game.id))]
    pub async fn record_game(
        &self,
        email: Option<&str>,
        game: GameResult,
    ) -> Result<RecordOutcome, StatsError> {
        self.repository.append(game.clone()).await?;
        info!(winner = %game.winner, players = game.players.len(), "Game recorded");

        let Some(email) = email else {
            warn!("No email set, game kept locally only");
            return Ok(RecordOutcome {
                game,
                saved_to_cloud: false,
                warning: Some("No email set; game was not saved to the cloud".to_string()),
            });
        };

        let timestamp = game.end_time.to_rfc3339_opts(SecondsFormat::Millis, true);
        match self
            .store
            .save(email, &self.app_name, &timestamp, &game)
            .await
        {
            Ok(()) => Ok(RecordOutcome {
                game,
                saved_to_cloud: true,
                warning: None,
            }),
            Err(err) => {
                error!(?err, "Failed to save game result to cloud");
                Ok(RecordOutcome {
                    game,
                    saved_to_cloud: false,
                    warning: Some(format!("Game was not saved to the cloud: {}", err)),
                })
            }
        }
    }

    /// Pulls the user's games from cloud storage and merges unseen ones into the session
    #[instrument(skip(self))]
    pub async fn sync_from_cloud(&self, email: &str) -> Result<SyncOutcome, StatsError> {
        let records = match self.store.load(email, &self.app_name).await {
            Ok(records) => records,
            Err(err) => {
                error!(?err, "Failed to load game results from cloud");
                return Ok(SyncOutcome {
                    warning: Some(format!("Could not load games from the cloud: {}", err)),
                    ..SyncOutcome::default()
                });
            }
        };

        let loaded = records.len();
        let games: Vec<GameResult> = records
            .into_iter()
            .filter_map(|record| match record.into_result() {
                Ok(game) => Some(game),
                Err(err) => {
                    warn!(?err, "Skipping malformed game record");
                    None
                }
            })
            .collect();
        let skipped = loaded - games.len();

        let added = self.repository.merge(games).await?;
        info!(loaded, added, skipped, "Cloud sync complete");

        Ok(SyncOutcome {
            loaded,
            added,
            skipped,
            warning: None,
        })
    }
}

pub struct StatsServiceBuilder {
    repository: Arc<dyn GameResultRepository>,
    store: Arc<dyn GameStore>,
    clock: Arc<dyn Clock>,
    app_name: String,
}

impl StatsServiceBuilder {
    fn new(repository: Arc<dyn GameResultRepository>) -> Self {
        Self {
            repository,
            store: Arc::new(InMemoryGameStore::new()),
            clock: Arc::new(SystemClock),
            app_name: DEFAULT_APP_NAME.to_string(),
        }
    }

    pub fn with_store(mut self, store: Arc<dyn GameStore>) -> Self {
        self.store = store;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    pub fn build(self) -> StatsService {
        StatsService {
            repository: self.repository,
            store: self.store,
            clock: self.clock,
            app_name: self.app_name,
        }
    }
}
