// Public API - what other modules can use
pub use attribute_value::{marshall, marshall_item, unmarshall, unmarshall_item};
pub use client::CloudGameStore;
pub use errors::CloudError;
pub use item::{decode_items, CloudItem};
pub use memory::InMemoryGameStore;

// Internal modules
mod attribute_value;
mod client;
mod errors;
mod item;
mod memory;

use async_trait::async_trait;

use crate::stats::{GameRecord, GameResult};

/// Remote key-value storage for finished games, keyed by user email and app
#[async_trait]
pub trait GameStore: Send + Sync {
    async fn save(
        &self,
        email: &str,
        app_name: &str,
        timestamp: &str,
        game: &GameResult,
    ) -> Result<(), CloudError>;

    async fn load(&self, email: &str, app_name: &str) -> Result<Vec<GameRecord>, CloudError>;
}
