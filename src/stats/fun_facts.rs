use chrono::{DateTime, Duration, Utc};

use super::{
    humanize::{humanize_duration, time_ago},
    FunFacts, GameResult,
};

const NOT_AVAILABLE: &str = "n/a";

impl FunFacts {
    /// Fun facts for a session with no recorded games
    pub fn empty() -> Self {
        Self {
            total_games: 0,
            total_reverses: 0,
            total_uno_declarations: 0,
            average_reverses_per_game: 0.0,
            average_uno_declarations_per_game: 0.0,
            highest_reverses_in_game: 0,
            highest_uno_declarations_in_game: 0,
            last_played: NOT_AVAILABLE.to_string(),
            shortest_game: NOT_AVAILABLE.to_string(),
            longest_game: NOT_AVAILABLE.to_string(),
            average_game_duration: NOT_AVAILABLE.to_string(),
        }
    }
}

/// Aggregates totals, averages, extremes and durations over `games`.
///
/// `now` anchors `last_played`; every other field depends on `games` only.
pub fn calculate_fun_facts(games: &[GameResult], now: DateTime<Utc>) -> FunFacts {
    if games.is_empty() {
        return FunFacts::empty();
    }

    let total_games = games.len() as u32;
    let total_reverses: u64 = games.iter().map(|g| g.reverse_count as u64).sum();
    let total_uno_declarations: u64 = games.iter().map(GameResult::total_uno_declarations).sum();

    let highest_reverses_in_game = games
        .iter()
        .map(|g| g.reverse_count as u64)
        .max()
        .unwrap_or(0);
    let highest_uno_declarations_in_game = games
        .iter()
        .map(GameResult::total_uno_declarations)
        .max()
        .unwrap_or(0);

    let durations: Vec<Duration> = games.iter().map(GameResult::duration).collect();
    let shortest = durations.iter().min().copied().unwrap_or_else(Duration::zero);
    let longest = durations.iter().max().copied().unwrap_or_else(Duration::zero);
    let total_millis: i64 = durations.iter().map(Duration::num_milliseconds).sum();
    let average = Duration::milliseconds(total_millis / total_games as i64);

    let last_played = games
        .iter()
        .map(|g| g.end_time)
        .max()
        .map(|latest| time_ago(now - latest))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    FunFacts {
        total_games,
        total_reverses,
        total_uno_declarations,
        average_reverses_per_game: total_reverses as f64 / total_games as f64,
        average_uno_declarations_per_game: total_uno_declarations as f64 / total_games as f64,
        highest_reverses_in_game,
        highest_uno_declarations_in_game,
        last_played,
        shortest_game: humanize_duration(shortest),
        longest_game: humanize_duration(longest),
        average_game_duration: humanize_duration(average),
    }
}
