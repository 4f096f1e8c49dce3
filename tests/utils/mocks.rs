use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::sync::{Arc, Mutex};

use unobuddy::{
    cloud::{CloudError, GameStore},
    stats::{Clock, GameRecord, GameResult},
};

// ============================================================================
// Mock Infrastructure
// ============================================================================

/// Game store whose every call fails, like an unreachable gateway
pub struct FailingGameStore;

#[async_trait]
impl GameStore for FailingGameStore {
    async fn save(
        &self,
        _email: &str,
        _app_name: &str,
        _timestamp: &str,
        _game: &GameResult,
    ) -> Result<(), CloudError> {
        Err(CloudError::Decode("gateway unreachable".to_string()))
    }

    async fn load(&self, _email: &str, _app_name: &str) -> Result<Vec<GameRecord>, CloudError> {
        Err(CloudError::Decode("gateway unreachable".to_string()))
    }
}

/// Game store holding records written by older clients, which saved no id,
/// reverse count or UNO declarations
pub struct LegacyHistoryStore {
    records: Vec<GameRecord>,
}

impl LegacyHistoryStore {
    pub fn new(records: Vec<serde_json::Value>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|record| serde_json::from_value(record).unwrap())
                .collect(),
        }
    }
}

#[async_trait]
impl GameStore for LegacyHistoryStore {
    async fn save(
        &self,
        _email: &str,
        _app_name: &str,
        _timestamp: &str,
        _game: &GameResult,
    ) -> Result<(), CloudError> {
        Ok(())
    }

    async fn load(&self, _email: &str, _app_name: &str) -> Result<Vec<GameRecord>, CloudError> {
        Ok(self.records.clone())
    }
}

/// Clock the test moves forward by hand
#[derive(Clone)]
pub struct MockClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl MockClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
