use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

/// A single session block as shown in the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub game: String,
    pub start_time: String, // "HH:MM"
    pub end_time: String,   // "HH:MM"
}

impl Event {
    pub fn new(game: &str, start_time: &str, end_time: &str) -> Self {
        Self {
            game: game.to_string(),
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
        }
    }

    /// Label used for the second row of a grid block.
    pub fn range_label(&self) -> String {
        format!("{}-{}", self.start_time, self.end_time)
    }
}

/// All events recorded on one calendar date, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayEvents {
    pub date: NaiveDate,
    pub events: Vec<Event>,
}

impl DayEvents {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }
}
