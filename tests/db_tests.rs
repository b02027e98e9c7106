mod common;
use chrono::Weekday;
use common::{d, db_path, insert_session, setup_test_db, ts};
use playweek::core::Core;
use playweek::core::week::week_window;
use playweek::db::pool::DbPool;
use playweek::db::queries::{load_day_rows, load_week_rows};
use playweek::errors::AppError;
use playweek::models::Event;
use rusqlite::Connection;

fn may_week() -> playweek::core::week::WeekWindow {
    // Mon 2024-05-06 .. Sun 2024-05-12
    week_window(d("2024-05-08"), Weekday::Mon, 0).expect("window")
}

#[test]
fn test_load_week_rows_filters_and_orders() {
    let db = setup_test_db("db_filters_orders");
    insert_session(&db, "osu!", "2024-05-07T20:00:00.000000", "2024-05-07T21:15:00.000000", Some(4500));
    insert_session(&db, "Valorant", "2024-05-06T09:00:00.000000", "2024-05-06T10:30:00.000000", Some(5400));
    insert_session(&db, "Old", "2024-05-05T09:00:00.000000", "2024-05-05T10:00:00.000000", None);
    insert_session(&db, "Next", "2024-05-13T09:00:00.000000", "2024-05-13T10:00:00.000000", None);
    insert_session(&db, "Apex Legends", "2024-05-06 11:00:00", "2024-05-06 12:00:00", None);

    let pool = DbPool::open_snapshot(&db).expect("open");
    let rows = load_week_rows(&pool, &may_week()).expect("rows");

    let games: Vec<_> = rows.iter().map(|r| r.game_name.as_str()).collect();
    assert_eq!(games, vec!["Valorant", "Apex Legends", "osu!"]);

    assert_eq!(rows[0].date, d("2024-05-06"));
    assert_eq!(rows[0].start_time, "09:00:00");
    assert_eq!(rows[0].end_time, "10:30:00");
    assert_eq!(rows[0].duration, Some(5400));
    assert_eq!(rows[1].duration, None);
}

#[test]
fn test_week_end_is_inclusive() {
    let db = setup_test_db("db_week_end_inclusive");
    insert_session(&db, "Sunday game", "2024-05-12T23:00:00", "2024-05-12T23:45:00", None);

    let pool = DbPool::open_snapshot(&db).expect("open");
    let rows = load_week_rows(&pool, &may_week()).expect("rows");

    assert_eq!(rows.len(), 1);
}

#[test]
fn test_load_day_rows() {
    let db = setup_test_db("db_day_rows");
    insert_session(&db, "Minecraft", &ts(d("2024-05-08"), "18:00"), &ts(d("2024-05-08"), "19:30"), Some(5400));
    insert_session(&db, "Minecraft", &ts(d("2024-05-09"), "18:00"), &ts(d("2024-05-09"), "19:30"), Some(5400));

    let pool = DbPool::open_snapshot(&db).expect("open");
    let rows = load_day_rows(&pool, &d("2024-05-08")).expect("rows");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].start_time, "18:00:00");
}

#[test]
fn test_missing_file_is_unavailable() {
    let missing = db_path("db_missing_file");

    let err = DbPool::open_snapshot(&missing).err().expect("must fail");
    assert!(matches!(err, AppError::DataSourceUnavailable(_)));
    // the snapshot is never created as a side effect
    assert!(!std::path::Path::new(&missing).exists());
}

#[test]
fn test_missing_table_is_query_failure() {
    let path = db_path("db_missing_table");
    Connection::open(&path)
        .expect("open")
        .execute_batch("CREATE TABLE other (x INTEGER);")
        .expect("create");

    let pool = DbPool::open_snapshot(&path).expect("open");
    let err = load_week_rows(&pool, &may_week()).unwrap_err();

    assert!(matches!(err, AppError::QueryFailure(_)));
}

#[test]
fn test_unparsable_timestamp_is_malformed_row() {
    let db = setup_test_db("db_malformed_row");
    // date() accepts it, time() of the end does not
    insert_session(&db, "Broken", "2024-05-06T09:00:00", "yesterday", None);

    let pool = DbPool::open_snapshot(&db).expect("open");
    let err = load_week_rows(&pool, &may_week()).unwrap_err();

    assert!(matches!(err, AppError::MalformedRow(_)));
}

#[test]
fn test_core_load_week_groups_rows() {
    let db = setup_test_db("core_load_week");
    insert_session(&db, "Valorant", "2024-05-06T09:00:00", "2024-05-06T10:30:00", None);
    insert_session(&db, "Apex Legends", "2024-05-06T11:00:00", "2024-05-06T12:00:00", None);
    insert_session(&db, "osu!", "2024-05-07T20:00:00", "2024-05-07T21:15:00", None);

    let days = Core::load_week(&db, &may_week());

    assert_eq!(days.len(), 2);
    assert_eq!(
        days[0].events,
        vec![
            Event::new("Valorant", "09:00", "10:30"),
            Event::new("Apex Legends", "11:00", "12:00"),
        ]
    );
    assert_eq!(days[1].events, vec![Event::new("osu!", "20:00", "21:15")]);
}

#[test]
fn test_core_load_week_degrades_to_empty() {
    let missing = db_path("core_degrade_missing");
    assert!(Core::load_week(&missing, &may_week()).is_empty());

    let no_table = db_path("core_degrade_no_table");
    Connection::open(&no_table)
        .expect("open")
        .execute_batch("CREATE TABLE other (x INTEGER);")
        .expect("create");
    assert!(Core::load_week(&no_table, &may_week()).is_empty());

    // the fallible variant still reports the cause
    let err = Core::try_load_week(&missing, &may_week()).unwrap_err();
    assert!(matches!(err, AppError::DataSourceUnavailable(_)));
}
