//! Per-member warning counter storage. The limit lives in the logic layer.

use crate::errors::AppResult;
use crate::models::UserId;
use rusqlite::{Connection, OptionalExtension, params};

/// Current count for `user` (0 when never warned).
pub fn get_count(conn: &Connection, user: UserId) -> AppResult<i64> {
    let count: Option<i64> = conn
        .query_row(
            "SELECT count FROM infractions WHERE user_id = ?1",
            [user],
            |row| row.get(0),
        )
        .optional()?;
    Ok(count.unwrap_or(0))
}

pub fn set_count(conn: &Connection, user: UserId, count: i64) -> AppResult<()> {
    conn.execute(
        "INSERT INTO infractions (user_id, count) VALUES (?1, ?2)
         ON CONFLICT(user_id) DO UPDATE SET count = excluded.count",
        params![user, count],
    )?;
    Ok(())
}
