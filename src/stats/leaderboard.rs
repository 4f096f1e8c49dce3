use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use super::{GameResult, LeaderboardEntry};

#[derive(Debug, Default)]
struct PlayerTally {
    games_played: u32,
    wins: u32,
}

impl PlayerTally {
    fn win_ratio(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.wins as f64 / self.games_played as f64
        }
    }

    fn formatted_avg(&self) -> String {
        if self.games_played == 0 {
            "0.000".to_string()
        } else {
            format!("{:.3}", self.win_ratio())
        }
    }
}

/// Builds the ranked leaderboard for every player that appears in `games`.
///
/// Entries are ordered by win ratio (highest first), then by games played,
/// then by name, so the same input always yields the same order.
pub fn build_leaderboard(games: &[GameResult]) -> Vec<LeaderboardEntry> {
    let mut tallies: HashMap<&str, PlayerTally> = HashMap::new();

    for game in games {
        let mut counted = HashSet::new();
        for player in &game.players {
            if !counted.insert(player.as_str()) {
                continue;
            }
            let tally = tallies.entry(player.as_str()).or_default();
            tally.games_played += 1;
            if *player == game.winner {
                tally.wins += 1;
            }
        }
    }

    let mut ranked: Vec<(&str, PlayerTally)> = tallies.into_iter().collect();
    ranked.sort_by(|(name_a, a), (name_b, b)| {
        b.win_ratio()
            .partial_cmp(&a.win_ratio())
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.games_played.cmp(&a.games_played))
            .then_with(|| name_a.cmp(name_b))
    });

    ranked
        .into_iter()
        .map(|(name, tally)| LeaderboardEntry {
            name: name.to_string(),
            wins: tally.wins,
            losses: tally.games_played - tally.wins,
            avg: tally.formatted_avg(),
        })
        .collect()
}
