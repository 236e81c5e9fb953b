//! Unified application error type.
//! All modules (db, store, core, cli, remote) return AppError to keep the
//! error handling consistent and easy to manage.

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
    // Storage-related
    // ---------------------------
    #[error("Storage error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Corrupt snapshot under key '{key}': {reason}")]
    Snapshot { key: String, reason: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid color tag: {0}")]
    InvalidColor(String),

    #[error("Invalid recurrence pattern: {0}")]
    InvalidRecurrence(String),

    // ---------------------------
    // Store errors
    // ---------------------------
    #[error("No {kind} found with id {id}")]
    NotFound { kind: &'static str, id: i64 },

    #[error("Category {0} still has debts attached and cannot be deleted")]
    CategoryInUse(i64),

    #[error("Validation error: {0}")]
    Validation(String),

    // ---------------------------
    // Remote errors
    // ---------------------------
    #[error("{0}")]
    Remote(String),

    #[error("Not signed in. Run 'daykeeper account login' first")]
    NotSignedIn,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn not_found(kind: &'static str, id: i64) -> Self {
        AppError::NotFound { kind, id }
    }
}

pub type AppResult<T> = Result<T, AppError>;
