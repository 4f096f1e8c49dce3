// Library crate for the UNO Buddy scorekeeping service
// This file exposes the public API for integration tests

pub mod cloud;
pub mod config;
pub mod game;
pub mod routes;
pub mod session;
pub mod setup;
pub mod shared;
pub mod stats;

// Re-export commonly used types for easier access in tests
pub use cloud::{CloudGameStore, GameStore, InMemoryGameStore};
pub use config::AppConfig;
pub use game::{GameInProgress, PlayService};
pub use routes::router;
pub use session::{FileCache, InMemoryCache, SessionService};
pub use shared::{AppError, AppState};
pub use stats::{
    build_leaderboard, calculate_fun_facts, FunFacts, GameRecord, GameResult,
    InMemoryGameResultRepository, LeaderboardEntry, StatsService,
};
