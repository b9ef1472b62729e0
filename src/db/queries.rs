//! Session store: per-member, per-day clock-in/clock-out rows.
//!
//! The store enforces no attendance rules; callers (the `core` logic) check
//! for open sessions before inserting or closing.

use crate::errors::{AppError, AppResult};
use crate::models::UserId;
use crate::models::session::Session;
use crate::utils::date::format_date;
use crate::utils::time::{format_time, parse_time};
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, Result, Row, params};
use tracing::warn;

pub fn map_row(row: &Row) -> Result<Session> {
    let date_str: String = row.get("date")?;
    let in_str: String = row.get("clock_in")?;
    let out_str: Option<String> = row.get("clock_out")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let clock_in = parse_time(&in_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(in_str.clone())),
        )
    })?;

    let clock_out = match out_str {
        Some(s) => Some(parse_time(&s).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidTime(s.clone())),
            )
        })?),
        None => None,
    };

    Ok(Session {
        user_id: row.get("user_id")?,
        date,
        clock_in,
        clock_out,
    })
}

/// Append an open session. No uniqueness check.
pub fn insert_clock_in(
    conn: &Connection,
    user: UserId,
    date: &NaiveDate,
    time: &NaiveTime,
) -> AppResult<()> {
    conn.execute(
        "INSERT INTO clock_times (user_id, date, clock_in, clock_out) VALUES (?1, ?2, ?3, NULL)",
        params![user, format_date(date), format_time(time)],
    )?;
    Ok(())
}

/// Append a session as-is (open or closed).
pub fn insert_session(conn: &Connection, s: &Session) -> AppResult<()> {
    conn.execute(
        "INSERT INTO clock_times (user_id, date, clock_in, clock_out) VALUES (?1, ?2, ?3, ?4)",
        params![
            s.user_id,
            format_date(&s.date),
            format_time(&s.clock_in),
            s.clock_out.as_ref().map(format_time),
        ],
    )?;
    Ok(())
}

/// Close the open session of `user` on `date`.
///
/// Returns the number of rows updated (0 when nothing was open). When several
/// rows are open, which breaks the one-open-session invariant, the earliest
/// inserted one is closed and the anomaly is logged.
pub fn complete_clock_out(
    conn: &Connection,
    user: UserId,
    date: &NaiveDate,
    time: &NaiveTime,
) -> AppResult<usize> {
    let date_str = format_date(date);

    let open: i64 = conn.query_row(
        "SELECT COUNT(*) FROM clock_times
         WHERE user_id = ?1 AND date = ?2 AND clock_out IS NULL",
        params![user, &date_str],
        |row| row.get(0),
    )?;

    if open > 1 {
        warn!(
            user_id = user,
            date = %date_str,
            open_sessions = open,
            "multiple open sessions; closing the earliest"
        );
    }

    let affected = conn.execute(
        "UPDATE clock_times SET clock_out = ?1
         WHERE rowid = (
             SELECT rowid FROM clock_times
             WHERE user_id = ?2 AND date = ?3 AND clock_out IS NULL
             ORDER BY rowid ASC
             LIMIT 1
         )",
        params![format_time(time), user, &date_str],
    )?;

    Ok(affected)
}

/// All sessions of `user` on `date`, in insertion order.
pub fn list_sessions(conn: &Connection, user: UserId, date: &NaiveDate) -> AppResult<Vec<Session>> {
    let mut stmt = conn.prepare_cached(
        "SELECT user_id, date, clock_in, clock_out FROM clock_times
         WHERE user_id = ?1 AND date = ?2
         ORDER BY rowid ASC",
    )?;

    let rows = stmt.query_map(params![user, format_date(date)], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Sessions without a clock-out, across all dates; restricted to `user` when given.
pub fn list_open_sessions(conn: &Connection, user: Option<UserId>) -> AppResult<Vec<Session>> {
    let mut stmt = conn.prepare_cached(
        "SELECT user_id, date, clock_in, clock_out FROM clock_times
         WHERE clock_out IS NULL AND (?1 IS NULL OR user_id = ?1)
         ORDER BY rowid ASC",
    )?;

    let rows = stmt.query_map(params![user], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Remove the row(s) identified by `(user, date, clock_in)`; returns the affected count.
pub fn delete_session(
    conn: &Connection,
    user: UserId,
    date: &NaiveDate,
    clock_in: &NaiveTime,
) -> AppResult<usize> {
    // time() normalizes legacy "HH:MM" rows to "HH:MM:SS"
    let affected = conn.execute(
        "DELETE FROM clock_times WHERE user_id = ?1 AND date = ?2 AND time(clock_in) = ?3",
        params![user, format_date(date), format_time(clock_in)],
    )?;
    Ok(affected)
}

/// Remove the session at `position` (0-based, insertion order, as returned by
/// [`list_sessions`]). Only that row goes, even when another row shares its
/// clock-in. Returns the affected count.
pub fn delete_session_at(
    conn: &Connection,
    user: UserId,
    date: &NaiveDate,
    position: usize,
) -> AppResult<usize> {
    let affected = conn.execute(
        "DELETE FROM clock_times
         WHERE rowid = (
             SELECT rowid FROM clock_times
             WHERE user_id = ?1 AND date = ?2
             ORDER BY rowid ASC
             LIMIT 1 OFFSET ?3
         )",
        params![user, format_date(date), position as i64],
    )?;
    Ok(affected)
}

/// Distinct members with at least one row on `date`, in first-seen order.
pub fn users_on_date(conn: &Connection, date: &NaiveDate) -> AppResult<Vec<UserId>> {
    let mut stmt = conn.prepare_cached(
        "SELECT user_id FROM clock_times
         WHERE date = ?1
         GROUP BY user_id
         ORDER BY MIN(rowid) ASC",
    )?;

    let rows = stmt.query_map([format_date(date)], |row| row.get::<_, UserId>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Members holding more than one open session (across all dates), with the
/// number of open rows each. Empty when the one-open-session invariant holds.
pub fn members_with_several_open(conn: &Connection) -> AppResult<Vec<(UserId, i64)>> {
    let mut stmt = conn.prepare_cached(
        "SELECT user_id, COUNT(*) FROM clock_times
         WHERE clock_out IS NULL
         GROUP BY user_id
         HAVING COUNT(*) > 1
         ORDER BY user_id ASC",
    )?;

    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
