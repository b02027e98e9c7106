//! Unified application error type.
//! Every layer (db, core, cli, export) returns AppError so the week loader
//! can decide in one place which failures degrade to an empty calendar.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Data source
    // ---------------------------
    #[error("Data source unavailable: {0}")]
    DataSourceUnavailable(String),

    #[error("Query failed: {0}")]
    QueryFailure(String),

    #[error("Malformed session row: {0}")]
    MalformedRow(String),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
