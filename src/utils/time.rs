//! Time utilities: parsing HH:MM[:SS], storage format, hour rounding and formatting.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

/// Storage format of `flights.start_time` / `flights.end_time`.
pub const DB_TIME_FORMAT: &str = "%H:%M:%S";

/// Parse a time of day typed by the user or read from the database.
/// Both `HH:MM` and `HH:MM:SS` are accepted.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

pub fn format_db_time(t: &NaiveTime) -> String {
    t.format(DB_TIME_FORMAT).to_string()
}

/// Round a number of hours to two decimals.
pub fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

/// `1.5` → `"1.50"`
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

/// `1.5` → `"01h 30m"`, used next to decimal hours in listings.
pub fn hours2readable(hours: f64) -> String {
    let mins = (hours * 60.0).round() as i64;
    format!("{:02}h {:02}m", mins / 60, mins % 60)
}
