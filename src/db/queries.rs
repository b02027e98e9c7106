use crate::core::week::WeekWindow;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::SessionRow;
use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{Row, params};

const WEEK_SQL: &str = "SELECT date(start_time) AS date,
            time(start_time) AS start_time,
            time(end_time)   AS end_time,
            game_name,
            duration
     FROM game_sessions
     WHERE date(game_sessions.start_time) BETWEEN ?1 AND ?2
     ORDER BY datetime(game_sessions.start_time)";

/// Rows whose start date falls inside `window`, ordered by start time.
pub fn load_week_rows(pool: &DbPool, window: &WeekWindow) -> AppResult<Vec<SessionRow>> {
    let start = window.start.format("%Y-%m-%d").to_string();
    let end = window.end.format("%Y-%m-%d").to_string();

    let rows = pool.with_conn(|conn| run_query(conn, params![start, end]))?;
    log::debug!("loaded {} session rows for {start}..{end}", rows.len());
    Ok(rows)
}

/// Rows starting on `date`, ordered by start time.
pub fn load_day_rows(pool: &DbPool, date: &NaiveDate) -> AppResult<Vec<SessionRow>> {
    let d = date.format("%Y-%m-%d").to_string();
    pool.with_conn(|conn| run_query(conn, params![d, d]))
}

fn run_query(
    conn: &rusqlite::Connection,
    params: &[&dyn rusqlite::ToSql],
) -> AppResult<Vec<SessionRow>> {
    let mut stmt = conn
        .prepare(WEEK_SQL)
        .map_err(|e| AppError::QueryFailure(e.to_string()))?;

    let rows = stmt
        .query_map(params, map_row)
        .map_err(|e| AppError::QueryFailure(e.to_string()))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(classify_row_error)?);
    }
    Ok(out)
}

pub fn map_row(row: &Row) -> rusqlite::Result<SessionRow> {
    let date_str = required_text(row, 0, "date")?;
    let start_time = required_text(row, 1, "start_time")?;
    let end_time = required_text(row, 2, "end_time")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            Type::Text,
            Box::new(AppError::MalformedRow(format!("invalid date '{date_str}'"))),
        )
    })?;

    Ok(SessionRow {
        date,
        start_time,
        end_time,
        game_name: row.get(3)?,
        duration: row.get::<_, Option<f64>>(4)?.map(|secs| secs as i64),
    })
}

/// `date()`/`time()` yield NULL when SQLite cannot parse the stored timestamp.
fn required_text(row: &Row, idx: usize, name: &str) -> rusqlite::Result<String> {
    let value: Option<String> = row.get(idx)?;
    value.ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Null,
            Box::new(AppError::MalformedRow(format!(
                "column '{name}' is not a valid timestamp"
            ))),
        )
    })
}

fn classify_row_error(e: rusqlite::Error) -> AppError {
    match e {
        rusqlite::Error::FromSqlConversionFailure(_, _, inner) => match inner.downcast::<AppError>() {
            Ok(app) => *app,
            Err(other) => AppError::MalformedRow(other.to_string()),
        },
        rusqlite::Error::InvalidColumnType(idx, name, ty) => {
            AppError::MalformedRow(format!("column {idx} ({name}) has type {ty}"))
        }
        other => AppError::QueryFailure(other.to_string()),
    }
}
