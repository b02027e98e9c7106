use crate::models::{DayEvents, Event, SessionRow};
use crate::utils::time::truncate_to_minute;
use indexmap::IndexMap;

/// Group flat session rows into per-date event lists.
///
/// Rows are expected already filtered to the wanted window and ordered by
/// start time. Dates come out in order of first appearance in `rows`, and
/// events keep their relative input order inside each date.
pub fn group_rows(rows: &[SessionRow]) -> Vec<DayEvents> {
    let mut by_date: IndexMap<_, Vec<Event>> = IndexMap::new();

    for row in rows {
        by_date.entry(row.date).or_default().push(Event {
            game: row.game_name.clone(),
            start_time: truncate_to_minute(&row.start_time),
            end_time: truncate_to_minute(&row.end_time),
        });
    }

    by_date
        .into_iter()
        .map(|(date, events)| DayEvents { date, events })
        .collect()
}
