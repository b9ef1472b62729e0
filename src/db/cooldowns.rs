//! Last-use timestamps of rate-limited commands (one global bucket per command).

use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;
use rusqlite::{Connection, OptionalExtension, params};

const STAMP_FMT: &str = "%Y-%m-%d %H:%M:%S%.3f";

pub fn last_used(conn: &Connection, command: &str) -> AppResult<Option<NaiveDateTime>> {
    let raw: Option<String> = conn
        .query_row(
            "SELECT last_used FROM cooldowns WHERE command = ?1",
            [command],
            |row| row.get(0),
        )
        .optional()?;

    raw.map(|s| NaiveDateTime::parse_from_str(&s, STAMP_FMT).map_err(|_| AppError::InvalidTime(s)))
        .transpose()
}

pub fn touch(conn: &Connection, command: &str, at: &NaiveDateTime) -> AppResult<()> {
    conn.execute(
        "INSERT INTO cooldowns (command, last_used) VALUES (?1, ?2)
         ON CONFLICT(command) DO UPDATE SET last_used = excluded.last_used",
        params![command, at.format(STAMP_FMT).to_string()],
    )?;
    Ok(())
}
