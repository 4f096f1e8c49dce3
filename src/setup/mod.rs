// Public API - what other modules can use
pub use handlers::list_players;
pub use roster::{previous_players, Roster, RosterError, MIN_PLAYERS};

// Internal modules
mod handlers;
mod roster;
