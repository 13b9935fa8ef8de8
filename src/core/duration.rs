//! Flight duration derivation and validation.

use crate::errors::{AppError, AppResult};
use crate::utils::time::round_hours;
use chrono::NaiveTime;

/// Hours between `start` and `end` on the same day, rounded to 2 decimals.
/// Negative when `end` is earlier than `start`; no wrap past midnight.
pub fn compute_duration(start: NaiveTime, end: NaiveTime) -> f64 {
    let seconds = (end - start).num_seconds();
    round_hours(seconds as f64 / 3600.0)
}

/// Duration of a flight window, rejecting anything that is not positive.
pub fn validate_window(start: NaiveTime, end: NaiveTime) -> AppResult<f64> {
    let duration = compute_duration(start, end);
    if duration <= 0.0 {
        return Err(AppError::InvalidDuration {
            start: start.format("%H:%M").to_string(),
            end: end.format("%H:%M").to_string(),
        });
    }
    Ok(duration)
}
