use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use super::{unmarshall_item, CloudError};
use crate::stats::{GameRecord, GameResult};

/// One stored game as laid out in the remote table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudItem {
    /// Partition key: the lower-cased email
    pub pk: String,
    /// Sort key: `{app}#{timestamp}`
    pub sk: String,
    pub ts: String,
    pub user: String,
    pub app: String,
    pub gsi1pk: String,
    pub gsi1sk: String,
    pub game: GameResult,
}

impl CloudItem {
    pub fn new(email: &str, app_name: &str, timestamp: &str, game: &GameResult) -> Self {
        Self {
            pk: email.to_lowercase(),
            sk: format!("{}#{}", app_name, timestamp),
            ts: timestamp.to_string(),
            user: email.to_string(),
            app: app_name.to_string(),
            gsi1pk: app_name.to_string(),
            gsi1sk: timestamp.to_string(),
            game: game.clone(),
        }
    }

    pub fn to_attribute_map(&self) -> Result<Map<String, Value>, CloudError> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => Ok(super::marshall_item(&map)),
            Ok(other) => Err(CloudError::Decode(format!(
                "item did not serialize to an object: {}",
                other
            ))),
            Err(e) => Err(CloudError::Decode(e.to_string())),
        }
    }
}

/// Extracts the `game` attribute of every marshalled item.
///
/// Items that cannot be decoded are logged and skipped so that one bad row
/// does not hide the rest of the history.
pub fn decode_items(items: &[Map<String, Value>]) -> Vec<GameRecord> {
    items
        .iter()
        .filter_map(|item| match decode_item(item) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(?err, sk = ?item.get("sk"), "Skipping undecodable cloud item");
                None
            }
        })
        .collect()
}

fn decode_item(item: &Map<String, Value>) -> Result<GameRecord, CloudError> {
    let mut plain = unmarshall_item(item)?;
    let game = plain
        .remove("game")
        .ok_or_else(|| CloudError::Decode("item has no game attribute".to_string()))?;
    serde_json::from_value(game).map_err(|e| CloudError::Decode(e.to_string()))
}
