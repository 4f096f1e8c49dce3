use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use tracing::warn;
use uuid::Uuid;

use super::StatsError;

/// A completed game. Created once when a game finishes and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    pub id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub winner: String,
    pub players: Vec<String>,
    pub reverse_count: u32,
    pub uno_declarations: BTreeMap<String, u32>,
}

impl GameResult {
    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }

    /// Sum of every player's UNO declarations in this game
    pub fn total_uno_declarations(&self) -> u64 {
        self.uno_declarations.values().map(|&count| count as u64).sum()
    }
}

/// Shape of a game as it comes back from remote storage.
///
/// Older clients saved games without an id, reverse count or UNO
/// declarations, so those fields are optional here and filled in by
/// [`GameRecord::into_result`]. A missing id is derived from the game's
/// content, so loading the same record twice yields the same id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub winner: Option<String>,
    #[serde(default)]
    pub players: Option<Vec<String>>,
    #[serde(default)]
    pub reverse_count: Option<u32>,
    #[serde(default)]
    pub uno_declarations: Option<BTreeMap<String, u32>>,
}

impl GameRecord {
    pub fn into_result(self) -> Result<GameResult, StatsError> {
        let start_time = self
            .start_time
            .ok_or_else(|| StatsError::Validation("missing startTime".to_string()))?;
        let end_time = self
            .end_time
            .ok_or_else(|| StatsError::Validation("missing endTime".to_string()))?;
        let winner = self
            .winner
            .ok_or_else(|| StatsError::Validation("missing winner".to_string()))?;
        let players = distinct_players(self.players.unwrap_or_default());

        if players.is_empty() {
            return Err(StatsError::Validation("game has no players".to_string()));
        }

        if end_time < start_time {
            return Err(StatsError::Validation(format!(
                "endTime {} is before startTime {}",
                end_time, start_time
            )));
        }

        if !players.contains(&winner) {
            warn!(winner = %winner, ?players, "Winner is not listed among the players");
        }

        let id = match self.id {
            Some(id) => id,
            None => derived_id(start_time, end_time, &winner, &players),
        };

        Ok(GameResult {
            id,
            start_time,
            end_time,
            winner,
            players,
            reverse_count: self.reverse_count.unwrap_or_default(),
            uno_declarations: self.uno_declarations.unwrap_or_default(),
        })
    }
}

/// Drops repeated names, keeping the first occurrence
fn distinct_players(players: Vec<String>) -> Vec<String> {
    let listed = players.len();
    let mut seen = HashSet::new();
    let distinct: Vec<String> = players
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect();

    if distinct.len() != listed {
        warn!(?distinct, listed, "Dropped repeated player names");
    }
    distinct
}

fn derived_id(
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    winner: &str,
    players: &[String],
) -> String {
    let key = format!(
        "{}|{}|{}|{}",
        start_time.to_rfc3339_opts(SecondsFormat::Millis, true),
        end_time.to_rfc3339_opts(SecondsFormat::Millis, true),
        winner,
        players.join("|"),
    );
    Uuid::new_v5(&Uuid::NAMESPACE_OID, key.as_bytes()).to_string()
}

impl From<GameResult> for GameRecord {
    fn from(result: GameResult) -> Self {
        Self {
            id: Some(result.id),
            start_time: Some(result.start_time),
            end_time: Some(result.end_time),
            winner: Some(result.winner),
            players: Some(result.players),
            reverse_count: Some(result.reverse_count),
            uno_declarations: Some(result.uno_declarations),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub avg: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunFacts {
    pub total_games: u32,
    pub total_reverses: u64,
    pub total_uno_declarations: u64,
    pub average_reverses_per_game: f64,
    pub average_uno_declarations_per_game: f64,
    pub highest_reverses_in_game: u64,
    pub highest_uno_declarations_in_game: u64,
    pub last_played: String,
    pub shortest_game: String,
    pub longest_game: String,
    pub average_game_duration: String,
}
