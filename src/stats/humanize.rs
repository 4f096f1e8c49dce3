use chrono::Duration;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const DAYS_PER_MONTH: f64 = 30.4;
const DAYS_PER_YEAR: f64 = 365.0;

/// Renders a span of time the way people say it out loud:
/// "a few seconds", "10 minutes", "an hour", "3 days".
///
/// Negative spans are treated as zero.
pub fn humanize_duration(duration: Duration) -> String {
    let secs = duration.num_seconds().max(0);

    if secs < 45 {
        return "a few seconds".to_string();
    }
    if secs < 90 {
        return "a minute".to_string();
    }
    if secs < 45 * MINUTE {
        return format!("{} minutes", rounded(secs, MINUTE));
    }
    if secs < 90 * MINUTE {
        return "an hour".to_string();
    }
    if secs < 22 * HOUR {
        return format!("{} hours", rounded(secs, HOUR));
    }
    if secs < 36 * HOUR {
        return "a day".to_string();
    }
    if secs < 26 * DAY {
        return format!("{} days", rounded(secs, DAY));
    }
    if secs < 45 * DAY {
        return "a month".to_string();
    }

    let days = secs as f64 / DAY as f64;
    if secs < 320 * DAY {
        let months = (days / DAYS_PER_MONTH).round().max(2.0) as i64;
        return format!("{} months", months);
    }
    if secs < 548 * DAY {
        return "a year".to_string();
    }

    let years = (days / DAYS_PER_YEAR).round().max(2.0) as i64;
    format!("{} years", years)
}

/// `humanize_duration` followed by "ago"
pub fn time_ago(elapsed: Duration) -> String {
    format!("{} ago", humanize_duration(elapsed))
}

fn rounded(secs: i64, unit: i64) -> i64 {
    (secs as f64 / unit as f64).round() as i64
}
