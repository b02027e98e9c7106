use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;

/// Inclusive 7-day window starting on the configured first weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekWindow {
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take(7)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Column (0..7) of `date` inside this window.
    pub fn column_of(&self, date: NaiveDate) -> Option<usize> {
        if !self.contains(date) {
            return None;
        }
        usize::try_from((date - self.start).num_days()).ok()
    }
}

/// Window containing `today`, moved `offset` weeks into the past.
///
/// Offsets that leave the representable date range are `InvalidDate`.
pub fn week_window(today: NaiveDate, first_day: Weekday, offset: i64) -> AppResult<WeekWindow> {
    let out_of_range = || AppError::InvalidDate(format!("week offset {offset} is out of range"));

    let back = Duration::days(i64::from(today.weekday().days_since(first_day)));
    let shift = Duration::try_weeks(offset).ok_or_else(out_of_range)?;

    let start = today
        .checked_sub_signed(back)
        .and_then(|d| d.checked_sub_signed(shift))
        .ok_or_else(out_of_range)?;
    let end = start
        .checked_add_signed(Duration::days(6))
        .ok_or_else(out_of_range)?;

    Ok(WeekWindow { start, end })
}
