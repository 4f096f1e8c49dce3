pub mod handlers;
pub mod humanize;
pub mod models;
pub mod repository;
pub mod service;

mod clock;
mod errors;
mod fun_facts;
mod leaderboard;

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::StatsError;
pub use fun_facts::calculate_fun_facts;
pub use leaderboard::build_leaderboard;
pub use models::*;
pub use repository::{GameResultRepository, InMemoryGameResultRepository};
pub use service::{RecordOutcome, StatsService, SyncOutcome};
