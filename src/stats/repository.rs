use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use super::{GameResult, StatsError};

/// Append-only list of the session's completed games
#[async_trait]
pub trait GameResultRepository: Send + Sync {
    async fn append(&self, game: GameResult) -> Result<(), StatsError>;
    /// Appends the games whose ids are not already known, returning how many were added
    async fn merge(&self, games: Vec<GameResult>) -> Result<usize, StatsError>;
    async fn list(&self) -> Result<Vec<GameResult>, StatsError>;
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryGameResultRepository {
    games: Arc<RwLock<Vec<GameResult>>>,
}

impl InMemoryGameResultRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_games(games: Vec<GameResult>) -> Self {
        Self {
            games: Arc::new(RwLock::new(games)),
        }
    }
}

#[async_trait]
impl GameResultRepository for InMemoryGameResultRepository {
    #[instrument(skip(self, game), fields(game_id = %game.id))]
    async fn append(&self, game: GameResult) -> Result<(), StatsError> {
        let mut games = self.games.write().await;
        if games.iter().any(|existing| existing.id == game.id) {
            return Err(StatsError::Repository(format!(
                "game {} already recorded",
                game.id
            )));
        }
        games.push(game);
        debug!(total = games.len(), "Game appended");
        Ok(())
    }

    #[instrument(skip(self, incoming), fields(incoming = incoming.len()))]
    async fn merge(&self, incoming: Vec<GameResult>) -> Result<usize, StatsError> {
        let mut games = self.games.write().await;
        let mut known: HashSet<String> = games.iter().map(|g| g.id.clone()).collect();

        let before = games.len();
        for game in incoming {
            if known.insert(game.id.clone()) {
                games.push(game);
            }
        }

        let added = games.len() - before;
        debug!(added, total = games.len(), "Games merged");
        Ok(added)
    }

    async fn list(&self) -> Result<Vec<GameResult>, StatsError> {
        Ok(self.games.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::BTreeMap;

    fn sample_game(id: &str) -> GameResult {
        GameResult {
            id: id.to_string(),
            start_time: Utc::now(),
            end_time: Utc::now(),
            winner: "alice".to_string(),
            players: vec!["alice".to_string(), "bob".to_string()],
            reverse_count: 0,
            uno_declarations: BTreeMap::new(),
        }
    }

    #[tokio::test]
    async fn appends_in_order() {
        let repo = InMemoryGameResultRepository::new();
        repo.append(sample_game("g1")).await.unwrap();
        repo.append(sample_game("g2")).await.unwrap();

        let ids: Vec<String> = repo.list().await.unwrap().into_iter().map(|g| g.id).collect();
        assert_eq!(ids, vec!["g1", "g2"]);
    }

    #[tokio::test]
    async fn rejects_duplicate_id_on_append() {
        let repo = InMemoryGameResultRepository::new();
        repo.append(sample_game("g1")).await.unwrap();

        let result = repo.append(sample_game("g1")).await;
        assert!(matches!(result, Err(StatsError::Repository(_))));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn merge_skips_known_and_repeated_ids() {
        let repo = InMemoryGameResultRepository::with_games(vec![sample_game("g1")]);

        let added = repo
            .merge(vec![sample_game("g1"), sample_game("g2"), sample_game("g2")])
            .await
            .unwrap();

        assert_eq!(added, 1);
        assert_eq!(repo.list().await.unwrap().len(), 2);
    }
}
