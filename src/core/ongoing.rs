use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_session_at, list_open_sessions, list_sessions};
use crate::errors::{AppError, AppResult};
use crate::models::UserId;
use crate::models::session::Session;
use chrono::NaiveDate;

/// "Who is currently clocked in" queries and the administrative stop.
pub struct OngoingLogic;

impl OngoingLogic {
    /// Open sessions: for one member on `today`, or everybody's across all dates.
    pub fn list(pool: &mut DbPool, user: Option<UserId>, today: NaiveDate) -> AppResult<Vec<Session>> {
        match user {
            Some(u) => Ok(list_sessions(&pool.conn, u, &today)?
                .into_iter()
                .filter(Session::is_open)
                .collect()),
            None => list_open_sessions(&pool.conn, None),
        }
    }

    /// Discard the member's open session on `today` (earliest first) without
    /// crediting any time.
    pub fn stop(pool: &mut DbPool, user: UserId, today: NaiveDate) -> AppResult<Session> {
        let sessions = list_sessions(&pool.conn, user, &today)?;
        let position = sessions
            .iter()
            .position(Session::is_open)
            .ok_or(AppError::NoOpenSession)?;
        let open = sessions[position].clone();

        if delete_session_at(&pool.conn, user, &today, position)? == 0 {
            return Err(AppError::NoOpenSession);
        }

        audit(
            &pool.conn,
            "stop",
            &user.to_string(),
            &format!(
                "Stopped and removed clock-in of {} started at {}",
                open.date_str(),
                open.clock_in_str()
            ),
        )?;

        Ok(open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::queries::{complete_clock_out, insert_clock_in};
    use chrono::NaiveTime;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, day).unwrap()
    }

    fn t(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M:%S").unwrap()
    }

    #[test]
    fn member_listing_is_limited_to_today() {
        let mut pool = DbPool::in_memory().unwrap();
        insert_clock_in(&pool.conn, 1, &d(1), &t("20:00:00")).unwrap();
        insert_clock_in(&pool.conn, 1, &d(2), &t("09:00:00")).unwrap();
        insert_clock_in(&pool.conn, 2, &d(2), &t("09:30:00")).unwrap();

        let mine = OngoingLogic::list(&mut pool, Some(1), d(2)).unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].clock_in, t("09:00:00"));

        let all = OngoingLogic::list(&mut pool, None, d(2)).unwrap();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn stop_discards_the_open_session_only() {
        let mut pool = DbPool::in_memory().unwrap();
        insert_clock_in(&pool.conn, 1, &d(2), &t("08:00:00")).unwrap();
        complete_clock_out(&pool.conn, 1, &d(2), &t("09:00:00")).unwrap();
        insert_clock_in(&pool.conn, 1, &d(2), &t("10:00:00")).unwrap();

        let stopped = OngoingLogic::stop(&mut pool, 1, d(2)).unwrap();
        assert_eq!(stopped.clock_in, t("10:00:00"));

        let left = list_sessions(&pool.conn, 1, &d(2)).unwrap();
        assert_eq!(left.len(), 1);
        assert!(!left[0].is_open());
    }

    #[test]
    fn stop_removes_legacy_rows_stored_without_seconds() {
        let mut pool = DbPool::in_memory().unwrap();
        pool.conn
            .execute(
                "INSERT INTO clock_times (user_id, date, clock_in, clock_out)
                 VALUES (1, '2025-09-02', '07:45', NULL)",
                [],
            )
            .unwrap();

        let stopped = OngoingLogic::stop(&mut pool, 1, d(2)).unwrap();
        assert_eq!(stopped.clock_in, t("07:45:00"));
        assert!(list_sessions(&pool.conn, 1, &d(2)).unwrap().is_empty());
    }

    #[test]
    fn stop_without_open_session_fails() {
        let mut pool = DbPool::in_memory().unwrap();
        let err = OngoingLogic::stop(&mut pool, 1, d(2)).unwrap_err();
        assert!(matches!(err, AppError::NoOpenSession));
    }
}
