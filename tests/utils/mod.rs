pub mod actions;
pub mod game_builders;
pub mod mocks;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use game_builders::GameResultBuilder;
#[allow(unused_imports)]
pub use mocks::{FailingGameStore, LegacyHistoryStore, MockClock};
pub use setup::{TestSetup, TestSetupBuilder};
