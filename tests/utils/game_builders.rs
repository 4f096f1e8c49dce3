use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::BTreeMap;

use unobuddy::GameResult;

// ============================================================================
// Game Result Builders
// ============================================================================

pub struct GameResultBuilder {
    id: String,
    start_time: DateTime<Utc>,
    minutes: i64,
    winner: String,
    players: Vec<String>,
    reverse_count: u32,
    uno_declarations: BTreeMap<String, u32>,
}

impl GameResultBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            start_time: Utc.with_ymd_and_hms(2024, 9, 23, 15, 0, 0).unwrap(),
            minutes: 10,
            winner: "alice".to_string(),
            players: vec!["alice".to_string(), "bob".to_string()],
            reverse_count: 0,
            uno_declarations: BTreeMap::new(),
        }
    }

    pub fn with_players(mut self, players: &[&str]) -> Self {
        self.players = players.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn won_by(mut self, winner: &str) -> Self {
        self.winner = winner.to_string();
        self
    }

    pub fn lasting_minutes(mut self, minutes: i64) -> Self {
        self.minutes = minutes;
        self
    }

    pub fn with_reverses(mut self, reverse_count: u32) -> Self {
        self.reverse_count = reverse_count;
        self
    }

    pub fn with_uno(mut self, player: &str, count: u32) -> Self {
        self.uno_declarations.insert(player.to_string(), count);
        self
    }

    pub fn build(self) -> GameResult {
        GameResult {
            id: self.id,
            start_time: self.start_time,
            end_time: self.start_time + Duration::minutes(self.minutes),
            winner: self.winner,
            players: self.players,
            reverse_count: self.reverse_count,
            uno_declarations: self.uno_declarations,
        }
    }
}
