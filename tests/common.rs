#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rusqlite::{Connection, params};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at an isolated directory so the
/// user's real configuration is never read.
pub fn pw(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("playweek");
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

/// Fresh, empty temp directory used as HOME for one test
pub fn temp_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_playweek_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp home");
    path.to_string_lossy().to_string()
}

/// Create a unique snapshot path inside the system temp dir with an empty
/// `game_sessions` table (same columns the recorder bot writes).
pub fn setup_test_db(name: &str) -> String {
    let db_path = db_path(name);
    let conn = Connection::open(&db_path).expect("open db");
    conn.execute_batch(
        "CREATE TABLE game_sessions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id TEXT,
            user_name TEXT,
            game_name TEXT,
            start_time TEXT,
            end_time TEXT,
            duration INTEGER,
            details TEXT
        );",
    )
    .expect("create table");
    db_path
}

/// Path for a snapshot file that does not exist yet
pub fn db_path(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_game_history.db", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn insert_session(db_path: &str, game: &str, start: &str, end: &str, duration: Option<i64>) {
    let conn = Connection::open(db_path).expect("open db");
    conn.execute(
        "INSERT INTO game_sessions (user_id, user_name, game_name, start_time, end_time, duration)
         VALUES ('42', 'tester', ?1, ?2, ?3, ?4)",
        params![game, start, end, duration],
    )
    .expect("insert session");
}

/// `date` at `HH:MM` in the recorder's ISO format.
pub fn ts(date: NaiveDate, hm: &str) -> String {
    format!("{}T{}:00.000000", date.format("%Y-%m-%d"), hm)
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}
