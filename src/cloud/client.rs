use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, info, instrument};

use super::{decode_items, CloudError, CloudItem, GameStore};
use crate::stats::{GameRecord, GameResult};

const USER_AGENT: &str = "UnoBuddy/0.1";

#[derive(Debug, Serialize)]
struct PutItemRequest<'a> {
    #[serde(rename = "TableName")]
    table_name: &'a str,
    #[serde(rename = "Item")]
    item: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(rename = "Items", default)]
    items: Vec<Map<String, Value>>,
}

/// Game storage behind an HTTP gateway in front of a DynamoDB table
pub struct CloudGameStore {
    client: Client,
    endpoint: String,
    table_name: String,
}

impl CloudGameStore {
    pub fn new(endpoint: &str, table_name: &str, timeout_secs: u64) -> Result<Self, CloudError> {
        let client = Self::build_client(timeout_secs)?;
        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            table_name: table_name.to_string(),
        })
    }

    fn build_client(timeout_secs: u64) -> Result<Client, CloudError> {
        Ok(Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(timeout_secs))
            .build()?)
    }

    fn query_url(&self) -> String {
        format!("{}/", self.endpoint)
    }
}

#[async_trait]
impl GameStore for CloudGameStore {
    #[instrument(skip(self, game), fields(game_id = %game.id))]
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

        let item = CloudItem::new(email, app_name, timestamp, game).to_attribute_map()?;
        debug!(?item, "Marshalled game item");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&PutItemRequest {
                table_name: &self.table_name,
                item,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CloudError::Status(response.status()));
        }

        info!("Game result saved to cloud");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn load(&self, email: &str, app_name: &str) -> Result<Vec<GameRecord>, CloudError> {
        if email.trim().is_empty() {
            return Err(CloudError::MissingEmail);
        }

        let user = email.to_lowercase();
        let response = self
            .client
            .get(self.query_url())
            .query(&[("user", user.as_str()), ("game", app_name)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CloudError::Status(response.status()));
        }

        let body: QueryResponse = response.json().await?;
        let records = decode_items(&body.items);

        info!(
            items = body.items.len(),
            decoded = records.len(),
            "Game results loaded from cloud"
        );
        Ok(records)
    }
}
