use crate::core::calculator::elapsed_rounded;
use crate::db::pool::DbPool;
use crate::db::queries::{complete_clock_out, insert_clock_in, list_open_sessions, list_sessions};
use crate::errors::{AppError, AppResult};
use crate::models::UserId;
use crate::models::session::Session;
use crate::utils::time::truncate_to_seconds;
use chrono::NaiveDateTime;
use tracing::{debug, warn};

/// Result of a successful clock-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockOut {
    pub session: Session,
    pub rounded_minutes: i64,
}

/// Clock-in / clock-out state machine. Holds no state of its own: every
/// decision re-reads the store.
pub struct AttendanceLogic;

impl AttendanceLogic {
    /// CLOCKED_OUT → CLOCKED_IN.
    ///
    /// Without `strict` only the current date is scanned for an open session,
    /// so a session left open on an earlier day does not block a new one.
    /// With `strict` any open session of the member blocks.
    pub fn clock_in(
        pool: &mut DbPool,
        user: UserId,
        now: NaiveDateTime,
        strict: bool,
    ) -> AppResult<Session> {
        let now = truncate_to_seconds(now);
        let date = now.date();

        let blocking = if strict {
            list_open_sessions(&pool.conn, Some(user))?.into_iter().next()
        } else {
            list_sessions(&pool.conn, user, &date)?
                .into_iter()
                .find(Session::is_open)
        };

        if let Some(open) = blocking {
            return Err(AppError::AlreadyClockedIn {
                date: open.date,
                clock_in: open.clock_in,
            });
        }

        insert_clock_in(&pool.conn, user, &date, &now.time())?;
        debug!(user_id = user, at = %now, "clock-in recorded");

        Ok(Session::open(user, date, now.time()))
    }

    /// CLOCKED_IN → CLOCKED_OUT. Only the current date is considered.
    pub fn clock_out(pool: &mut DbPool, user: UserId, now: NaiveDateTime) -> AppResult<ClockOut> {
        let now = truncate_to_seconds(now);
        let date = now.date();

        let open = list_sessions(&pool.conn, user, &date)?
            .into_iter()
            .find(Session::is_open)
            .ok_or(AppError::NoOpenSession)?;

        let affected = complete_clock_out(&pool.conn, user, &date, &now.time())?;
        if affected == 0 {
            warn!(user_id = user, date = %date, "open session vanished before clock-out");
            return Err(AppError::NoOpenSession);
        }

        let rounded_minutes = elapsed_rounded(open.started_at(), now);
        debug!(user_id = user, at = %now, minutes = rounded_minutes, "clock-out recorded");

        let mut session = open;
        session.clock_out = Some(now.time());

        Ok(ClockOut {
            session,
            rounded_minutes,
        })
    }
}
