use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

use crate::stats::GameResult;

pub const MIN_PLAYERS: usize = 2;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RosterError {
    #[error("Player names cannot be empty")]
    EmptyName,
    #[error("Player {0} was chosen more than once")]
    DuplicatePlayer(String),
    #[error("At least two players are needed, got {0}")]
    TooFewPlayers(usize),
}

/// Validated, ordered list of the players taking part in a game
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Roster(Vec<String>);

impl Roster {
    /// Trims every name and rejects blanks, case-insensitive duplicates and
    /// rosters smaller than [`MIN_PLAYERS`]. Order is preserved.
    pub fn new<I, S>(names: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut players = Vec::new();

        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                return Err(RosterError::EmptyName);
            }
            if !seen.insert(name.to_lowercase()) {
                return Err(RosterError::DuplicatePlayer(name.to_string()));
            }
            players.push(name.to_string());
        }

        if players.len() < MIN_PLAYERS {
            return Err(RosterError::TooFewPlayers(players.len()));
        }

        Ok(Self(players))
    }

    pub fn into_players(self) -> Vec<String> {
        self.0
    }
}

/// Everyone who has played before, sorted case-insensitively
pub fn previous_players(games: &[GameResult]) -> Vec<String> {
    let mut players: Vec<String> = games
        .iter()
        .flat_map(|g| g.players.iter().cloned())
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();

    players.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)));
    players
}
