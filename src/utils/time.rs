//! Time utilities: minute truncation, hour parsing and `HH:MM` arithmetic.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

/// Keep the `HH:MM` prefix of a wall-clock string.
///
/// Strings shorter than five characters are returned unchanged.
pub fn truncate_to_minute(t: &str) -> String {
    t.chars().take(5).collect()
}

/// Hour component of `HH:MM[:SS]`: the text before the first `:`.
///
/// `24` is accepted so that an "end of day" boundary can be expressed.
pub fn parse_hour(t: &str) -> AppResult<i32> {
    let head = t.split(':').next().unwrap_or_default().trim();
    match head.parse::<i32>() {
        Ok(h) if (0..=24).contains(&h) => Ok(h),
        _ => Err(AppError::MalformedRow(format!("invalid hour in time '{t}'"))),
    }
}

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
}

/// Minutes from `start` to `end`; an `end` before `start` wraps past midnight.
pub fn minutes_between_wrapping(start: NaiveTime, end: NaiveTime) -> i64 {
    let s = i64::from(start.num_seconds_from_midnight() / 60);
    let e = i64::from(end.num_seconds_from_midnight() / 60);
    if e >= s { e - s } else { e + 24 * 60 - s }
}
