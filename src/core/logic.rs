use crate::core::loader::group_rows;
use crate::core::week::WeekWindow;
use crate::db::pool::DbPool;
use crate::db::queries::load_week_rows;
use crate::errors::AppResult;
use crate::models::{DayEvents, GameDay, SessionRow, SessionSpan};
use crate::utils::time::{minutes_between_wrapping, parse_time, truncate_to_minute};
use indexmap::IndexMap;

pub struct Core;

impl Core {
    /// Load and group one week of sessions.
    ///
    /// Data source, query and row failures are logged and collapse to an
    /// empty week: the calendar is shown empty instead of failing.
    pub fn load_week(db_path: &str, window: &WeekWindow) -> Vec<DayEvents> {
        match Self::try_load_week(db_path, window) {
            Ok(days) => days,
            Err(e) => {
                log::error!("failed to load sessions from {db_path}: {e}");
                Vec::new()
            }
        }
    }

    /// Same as [`Core::load_week`] but with the failure surfaced.
    pub fn try_load_week(db_path: &str, window: &WeekWindow) -> AppResult<Vec<DayEvents>> {
        let pool = DbPool::open_snapshot(db_path)?;
        let rows = load_week_rows(&pool, window)?;
        Ok(group_rows(&rows))
    }

    /// Per-game breakdown of a single day, games in first-played order.
    pub fn day_detail(rows: &[SessionRow]) -> Vec<GameDay> {
        let mut by_game: IndexMap<&str, Vec<SessionSpan>> = IndexMap::new();

        for row in rows {
            by_game
                .entry(row.game_name.as_str())
                .or_default()
                .push(SessionSpan {
                    start_time: truncate_to_minute(&row.start_time),
                    end_time: truncate_to_minute(&row.end_time),
                    minutes: row_minutes(row),
                });
        }

        by_game
            .into_iter()
            .map(|(game, sessions)| GameDay {
                game: game.to_string(),
                total_minutes: sessions.iter().map(|s| s.minutes).sum(),
                sessions,
            })
            .collect()
    }

    /// Minutes played per game over the given days, at minute precision.
    ///
    /// Computed from the `HH:MM` times, like [`Core::day_detail`], so the
    /// legend and the day view agree for the same session.
    pub fn week_totals(days: &[DayEvents]) -> IndexMap<String, i64> {
        let mut totals: IndexMap<String, i64> = IndexMap::new();

        for ev in days.iter().flat_map(|d| d.events.iter()) {
            let minutes = match (parse_time(&ev.start_time), parse_time(&ev.end_time)) {
                (Some(s), Some(e)) => minutes_between_wrapping(s, e),
                _ => {
                    log::warn!("skipping unparsable event times for {}", ev.game);
                    continue;
                }
            };
            *totals.entry(ev.game.clone()).or_insert(0) += minutes;
        }

        totals
    }
}

/// Played minutes from the wall-clock times, the same source as
/// [`Core::week_totals`]; the stored `duration` is only a fallback when the
/// times do not parse.
fn row_minutes(row: &SessionRow) -> i64 {
    match (
        parse_time(&truncate_to_minute(&row.start_time)),
        parse_time(&truncate_to_minute(&row.end_time)),
    ) {
        (Some(s), Some(e)) => minutes_between_wrapping(s, e),
        _ => row.duration.map(|secs| secs / 60).unwrap_or(0),
    }
}
