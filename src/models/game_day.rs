use serde::Serialize;

/// One played interval inside a day detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSpan {
    pub start_time: String, // "HH:MM"
    pub end_time: String,   // "HH:MM"
    pub minutes: i64,
}

/// All sessions of a single game on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameDay {
    pub game: String,
    pub sessions: Vec<SessionSpan>,
    pub total_minutes: i64,
}
