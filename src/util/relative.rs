//! Relative-time formatting for fetched timestamps.

use chrono::{DateTime, NaiveDate, Utc};

/// Format a timestamp as a coarse "time ago" string.
///
/// Unparseable, empty, or absent input is a normal case and yields
/// `"N/A"`, never an error.
pub fn format_relative_time(input: Option<&str>) -> String {
    format_relative_time_at(input, Utc::now())
}

/// Same as [`format_relative_time`] with an explicit "now".
///
/// Pure given a fixed `now`; thresholds are half-open, exclusive on the
/// upper side: seconds below a minute, minutes below an hour, hours below
/// a day, days beyond.
pub fn format_relative_time_at(input: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(instant) = input.and_then(parse_instant) else {
        return "N/A".to_string();
    };

    let seconds = (now - instant).num_seconds();
    if seconds < 60 {
        format!("{seconds} seconds ago")
    } else if seconds < 3600 {
        format!("{} minutes ago", seconds / 60)
    } else if seconds < 86400 {
        format!("{} hours ago", seconds / 3600)
    } else {
        format!("{} days ago", seconds / 86400)
    }
}

/// Parse an RFC 3339 timestamp, or a bare date at UTC midnight.
fn parse_instant(input: &str) -> Option<DateTime<Utc>> {
    if input.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Some(parsed.with_timezone(&Utc));
    }
    input
        .parse::<NaiveDate>()
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
