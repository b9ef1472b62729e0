//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent. Expected attendance conditions and fatal failures
//! share the enum; `is_expected()` tells them apart.

use chrono::{NaiveDate, NaiveTime};
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Attendance conditions (expected, shown to the member)
    // ---------------------------
    #[error("You already have an active clock-in (since {clock_in} on {date}). Please clock out first.")]
    AlreadyClockedIn { date: NaiveDate, clock_in: NaiveTime },

    #[error("No active clock-in found. Clock in first using `clockin`.")]
    NoOpenSession,

    #[error("Invalid index {index}: there are {count} session(s) for that date")]
    IndexOutOfRange { index: i64, count: usize },

    #[error("Warning limit reached ({count}/{max})")]
    LimitReached { count: i64, max: i64 },

    #[error("You do not have permission to use `{0}`")]
    PermissionDenied(String),

    #[error("`{command}` is on cooldown. Please wait {retry_after:.2} seconds.")]
    OnCooldown { command: String, retry_after: f64 },

    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Minute amount out of range: {0}")]
    InvalidMinutes(i64),

    #[error("Invalid user: {0}")]
    InvalidUser(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Report output
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// True for conditions that are part of normal attendance flow
    /// (reported back to the member), false for storage/config failures.
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            AppError::AlreadyClockedIn { .. }
                | AppError::NoOpenSession
                | AppError::IndexOutOfRange { .. }
                | AppError::LimitReached { .. }
                | AppError::PermissionDenied(_)
                | AppError::OnCooldown { .. }
        )
    }
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Export(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Export(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
