//! The single, process-wide "reminder last sent" timestamp.

use crate::errors::{AppError, AppResult};
use crate::utils::time::DATETIME_FMT;
use chrono::NaiveDateTime;
use rusqlite::{Connection, OptionalExtension};

pub fn load_last_sent(conn: &Connection) -> AppResult<Option<NaiveDateTime>> {
    let raw: Option<Option<String>> = conn
        .query_row("SELECT last_sent FROM reminder WHERE id = 1", [], |row| {
            row.get(0)
        })
        .optional()?;

    match raw.flatten() {
        Some(s) => NaiveDateTime::parse_from_str(&s, DATETIME_FMT)
            .map(Some)
            .map_err(|_| AppError::InvalidTime(s)),
        None => Ok(None),
    }
}

pub fn store_last_sent(conn: &Connection, at: &NaiveDateTime) -> AppResult<()> {
    conn.execute(
        "INSERT INTO reminder (id, last_sent) VALUES (1, ?1)
         ON CONFLICT(id) DO UPDATE SET last_sent = excluded.last_sent",
        [at.format(DATETIME_FMT).to_string()],
    )?;
    Ok(())
}
