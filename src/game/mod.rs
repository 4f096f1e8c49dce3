// Public API
pub use self::core::{Direction, GameError, GameInProgress};
pub use handlers::{abandon_game, current_game, declare_uno, finish_game, reverse, start_game};
pub use service::PlayService;

// Internal modules
mod core;
mod handlers;
mod service;
pub mod types;
