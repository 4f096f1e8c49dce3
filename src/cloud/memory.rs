use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::{decode_items, CloudError, CloudItem, GameStore};
use crate::stats::{GameRecord, GameResult};

/// In-memory stand-in for the remote table, for offline runs and tests.
///
/// Items are kept in marshalled form under `(pk, sk)`, so reads go through
/// the same decoding path as the HTTP store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryGameStore {
    items: Arc<RwLock<BTreeMap<(String, String), Map<String, Value>>>>,
}

impl InMemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn item_count(&self) -> usize {
        self.items.read().await.len()
    }
}

#[async_trait]
impl GameStore for InMemoryGameStore {
    async fn save(
        &self,
        email: &str,
        app_name: &str,
        timestamp: &str,
        game: &GameResult,
    ) -> Result<(), CloudError> {
        if email.trim().is_empty() {
            return Err(CloudError::MissingEmail);
        }

        let item = CloudItem::new(email, app_name, timestamp, game);
        let key = (item.pk.clone(), item.sk.clone());
        let map = item.to_attribute_map()?;

        self.items.write().await.insert(key, map);
        debug!(game_id = %game.id, "Game stored in memory");
        Ok(())
    }

    async fn load(&self, email: &str, app_name: &str) -> Result<Vec<GameRecord>, CloudError> {
        if email.trim().is_empty() {
            return Err(CloudError::MissingEmail);
        }

        let pk = email.to_lowercase();
        let prefix = format!("{}#", app_name);
        let items = self.items.read().await;
        let matching: Vec<Map<String, Value>> = items
            .iter()
            .filter(|((item_pk, sk), _)| *item_pk == pk && sk.starts_with(&prefix))
            .map(|(_, item)| item.clone())
            .collect();

        Ok(decode_items(&matching))
    }
}
