use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{complete_clock_out, insert_session, list_sessions};
use crate::errors::{AppError, AppResult};
use crate::models::UserId;
use crate::models::session::Session;
use chrono::{NaiveDate, NaiveTime, TimeDelta};

/// Administrative correction: credit `minutes` of work to a member on a date.
pub struct AddMinutesLogic;

impl AddMinutesLogic {
    /// With an open session on `date`, close it at `clock_in + minutes`.
    /// Otherwise append a session running from 00:00:00 to `minutes` later.
    ///
    /// Times are plain times of day: a negative amount, or one that crosses
    /// midnight, wraps around and can end before it starts. That is accepted
    /// as entered.
    pub fn apply(
        pool: &mut DbPool,
        user: UserId,
        date: NaiveDate,
        minutes: i64,
    ) -> AppResult<Session> {
        let delta = TimeDelta::try_minutes(minutes).ok_or(AppError::InvalidMinutes(minutes))?;

        let open = list_sessions(&pool.conn, user, &date)?
            .into_iter()
            .find(Session::is_open);

        let session = match open {
            Some(mut s) => {
                let out = s.clock_in + delta;
                complete_clock_out(&pool.conn, user, &date, &out)?;
                s.clock_out = Some(out);
                s
            }
            None => {
                let s = Session {
                    user_id: user,
                    date,
                    clock_in: NaiveTime::MIN,
                    clock_out: Some(NaiveTime::MIN + delta),
                };
                insert_session(&pool.conn, &s)?;
                s
            }
        };

        audit(
            &pool.conn,
            "addminutes",
            &user.to_string(),
            &format!(
                "{} minute(s) on {}: {} - {}",
                minutes,
                session.date_str(),
                session.clock_in_str(),
                session.clock_out_str()
            ),
        )?;

        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::queries::insert_clock_in;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()
    }

    fn t(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M:%S").unwrap()
    }

    #[test]
    fn closes_open_session_relative_to_its_clock_in() {
        let mut pool = DbPool::in_memory().unwrap();
        insert_clock_in(&pool.conn, 3, &day(), &t("09:15:00")).unwrap();

        let s = AddMinutesLogic::apply(&mut pool, 3, day(), 45).unwrap();
        assert_eq!(s.clock_in, t("09:15:00"));
        assert_eq!(s.clock_out, Some(t("10:00:00")));

        let stored = list_sessions(&pool.conn, 3, &day()).unwrap();
        assert_eq!(stored, vec![s]);
    }

    #[test]
    fn synthesizes_midnight_session_when_nothing_exists() {
        let mut pool = DbPool::in_memory().unwrap();
        let s = AddMinutesLogic::apply(&mut pool, 3, day(), 90).unwrap();
        assert_eq!(s.clock_in, t("00:00:00"));
        assert_eq!(s.clock_out, Some(t("01:30:00")));
        assert_eq!(s.rounded_minutes(), Some(90));
    }

    #[test]
    fn appends_when_all_sessions_are_closed() {
        let mut pool = DbPool::in_memory().unwrap();
        insert_clock_in(&pool.conn, 3, &day(), &t("09:00:00")).unwrap();
        complete_clock_out(&pool.conn, 3, &day(), &t("10:00:00")).unwrap();

        AddMinutesLogic::apply(&mut pool, 3, day(), 30).unwrap();

        let stored = list_sessions(&pool.conn, 3, &day()).unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[1].clock_in, t("00:00:00"));
        assert_eq!(stored[1].clock_out, Some(t("00:30:00")));
    }

    #[test]
    fn negative_minutes_wrap_without_guard() {
        let mut pool = DbPool::in_memory().unwrap();
        insert_clock_in(&pool.conn, 3, &day(), &t("09:00:00")).unwrap();
        let s = AddMinutesLogic::apply(&mut pool, 3, day(), -30).unwrap();
        assert_eq!(s.clock_out, Some(t("08:30:00")));
        assert_eq!(s.rounded_minutes(), Some(-30));
    }

    #[test]
    fn correction_is_audited() {
        let mut pool = DbPool::in_memory().unwrap();
        AddMinutesLogic::apply(&mut pool, 3, day(), 15).unwrap();
        let n: i64 = pool
            .conn
            .query_row(
                "SELECT COUNT(*) FROM log WHERE operation = 'addminutes' AND target = '3'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(n, 1);
    }

    #[test]
    fn oversized_amount_is_rejected_without_writing() {
        let mut pool = DbPool::in_memory().unwrap();
        insert_clock_in(&pool.conn, 3, &day(), &t("09:00:00")).unwrap();

        for bad in [i64::MAX, i64::MIN] {
            let err = AddMinutesLogic::apply(&mut pool, 3, day(), bad).unwrap_err();
            assert!(matches!(err, AppError::InvalidMinutes(m) if m == bad));
        }

        let stored = list_sessions(&pool.conn, 3, &day()).unwrap();
        assert_eq!(stored.len(), 1);
        assert!(stored[0].is_open());
    }
}
