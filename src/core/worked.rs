use crate::db::pool::DbPool;
use crate::db::queries::{list_sessions, users_on_date};
use crate::errors::AppResult;
use crate::models::UserId;
use crate::models::report::{SessionDetail, UserTotal, WorkedReport};
use chrono::NaiveDate;

/// Worked-time aggregation over closed sessions.
pub struct WorkedLogic;

impl WorkedLogic {
    /// Total for one member on `date`, with itemized detail.
    ///
    /// Open sessions contribute nothing. Sessions rounding to 0 minutes are
    /// left out of `details` but still go through the sum. Detail indexes are
    /// positions in the full session list, so they can be fed to `rmv`.
    pub fn for_user(pool: &mut DbPool, user: UserId, date: NaiveDate) -> AppResult<UserTotal> {
        let sessions = list_sessions(&pool.conn, user, &date)?;

        let mut total_minutes = 0;
        let mut details = Vec::new();

        for (idx, s) in sessions.iter().enumerate() {
            let (Some(out), Some(minutes)) = (s.clock_out, s.rounded_minutes()) else {
                continue;
            };

            total_minutes += minutes;
            if minutes != 0 {
                details.push(SessionDetail {
                    index: idx + 1,
                    clock_in: s.clock_in,
                    clock_out: out,
                    minutes,
                });
            }
        }

        Ok(UserTotal {
            user_id: user,
            total_minutes,
            details,
        })
    }

    /// Totals for every member of `roster` on `date`; only strictly positive
    /// totals are kept. Roster entries carry totals only (no detail lines).
    pub fn for_roster(
        pool: &mut DbPool,
        roster: &[UserId],
        date: NaiveDate,
    ) -> AppResult<Vec<UserTotal>> {
        let mut out = Vec::new();
        for &user in roster {
            let mut total = Self::for_user(pool, user, date)?;
            if total.total_minutes > 0 {
                total.details.clear();
                out.push(total);
            }
        }
        Ok(out)
    }

    /// Report for `date`: a single member when `user` is given, otherwise the
    /// roster (or, with an empty roster, every member with rows on that date).
    pub fn report(
        pool: &mut DbPool,
        date: NaiveDate,
        user: Option<UserId>,
        roster: &[UserId],
    ) -> AppResult<WorkedReport> {
        let totals = match user {
            Some(u) => vec![Self::for_user(pool, u, date)?],
            None if roster.is_empty() => {
                let seen = users_on_date(&pool.conn, &date)?;
                Self::for_roster(pool, &seen, date)?
            }
            None => Self::for_roster(pool, roster, date)?,
        };

        Ok(WorkedReport { date, totals })
    }
}
