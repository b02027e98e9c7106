use chrono::NaiveDate;
use serde::Serialize;

/// One row of the week query.
///
/// Mirrors the result shape of `db::queries::load_week_rows`:
/// `date(start_time)`, `time(start_time)`, `time(end_time)`, `game_name`, `duration`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionRow {
    pub date: NaiveDate,    // ⇔ date(start_time)  "YYYY-MM-DD"
    pub start_time: String, // ⇔ time(start_time)  "HH:MM:SS"
    pub end_time: String,   // ⇔ time(end_time)    "HH:MM:SS"
    pub game_name: String,  // ⇔ game_name
    pub duration: Option<i64>, // ⇔ duration (seconds, nullable)
}

impl SessionRow {
    pub fn new(date: NaiveDate, start_time: &str, end_time: &str, game_name: &str) -> Self {
        Self {
            date,
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            game_name: game_name.to_string(),
            duration: None,
        }
    }

    pub fn with_duration(mut self, seconds: i64) -> Self {
        self.duration = Some(seconds);
        self
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
