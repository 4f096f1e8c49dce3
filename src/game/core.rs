use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum_macros::Display;
use uuid::Uuid;

use crate::setup::Roster;
use crate::stats::GameResult;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GameError {
    #[error("{0} is not playing in this game")]
    UnknownPlayer(String),
    #[error("Winner {0} is not playing in this game")]
    UnknownWinner(String),
    #[error("Game cannot end before it started")]
    EndsBeforeStart,
}

/// Turn order around the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// A game being played right now.
///
/// Tracks only what the scorekeeper records: who is playing, which way play
/// is going, how many reverses were played and who called "UNO!".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameInProgress {
    id: String,
    start_time: DateTime<Utc>,
    players: Vec<String>,
    direction: Direction,
    reverse_count: u32,
    uno_declarations: BTreeMap<String, u32>,
}

impl GameInProgress {
    pub fn start(roster: Roster, start_time: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            start_time,
            players: roster.into_players(),
            direction: Direction::Clockwise,
            reverse_count: 0,
            uno_declarations: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn reverse_count(&self) -> u32 {
        self.reverse_count
    }

    pub fn uno_declarations(&self) -> &BTreeMap<String, u32> {
        &self.uno_declarations
    }

    pub fn reverse(&mut self) {
        self.direction = self.direction.reversed();
        self.reverse_count += 1;
    }

    pub fn declare_uno(&mut self, player: &str) -> Result<u32, GameError> {
        if !self.is_playing(player) {
            return Err(GameError::UnknownPlayer(player.to_string()));
        }

        let count = self.uno_declarations.entry(player.to_string()).or_insert(0);
        *count += 1;
        Ok(*count)
    }

    /// Consumes the game and produces its permanent record
    pub fn finish(self, winner: &str, end_time: DateTime<Utc>) -> Result<GameResult, GameError> {
        if !self.is_playing(winner) {
            return Err(GameError::UnknownWinner(winner.to_string()));
        }
        if end_time < self.start_time {
            return Err(GameError::EndsBeforeStart);
        }

        Ok(GameResult {
            id: self.id,
            start_time: self.start_time,
            end_time,
            winner: winner.to_string(),
            players: self.players,
            reverse_count: self.reverse_count,
            uno_declarations: self.uno_declarations,
        })
    }

    fn is_playing(&self, player: &str) -> bool {
        self.players.iter().any(|p| p == player)
    }
}
