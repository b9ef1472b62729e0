//! Time utilities: parsing the stored `HH:MM:SS` values and the `--at` override.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDateTime, NaiveTime, Timelike};

pub const TIME_FMT: &str = "%H:%M:%S";
pub const DATETIME_FMT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a time-of-day as stored in `clock_times` (HH:MM:SS, HH:MM accepted).
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, TIME_FMT)
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

pub fn format_time(t: &NaiveTime) -> String {
    t.format(TIME_FMT).to_string()
}

pub fn parse_datetime(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), DATETIME_FMT)
        .or_else(|_| NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| AppError::InvalidTime(s.to_string()))
}

/// Drop sub-second precision; stored values have one-second resolution.
pub fn truncate_to_seconds(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_nanosecond(0).unwrap_or(dt)
}
