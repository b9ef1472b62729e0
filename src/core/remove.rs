use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_session_at, list_sessions};
use crate::errors::{AppError, AppResult};
use crate::models::UserId;
use crate::models::session::Session;
use chrono::NaiveDate;
use tracing::warn;

/// Index-based removal of a member's session.
pub struct RemoveLogic;

impl RemoveLogic {
    /// Delete the `index`-th session (1-based, insertion order) of `user` on `date`.
    pub fn apply(
        pool: &mut DbPool,
        user: UserId,
        date: NaiveDate,
        index: i64,
    ) -> AppResult<Session> {
        let sessions = list_sessions(&pool.conn, user, &date)?;
        let count = sessions.len();

        if index < 1 || index as usize > count {
            return Err(AppError::IndexOutOfRange { index, count });
        }

        let position = (index - 1) as usize;
        let target = sessions[position].clone();

        // the row can vanish between listing and deleting
        if delete_session_at(&pool.conn, user, &date, position)? == 0 {
            let count = list_sessions(&pool.conn, user, &date)?.len();
            warn!(user_id = user, date = %date, index, "session gone before removal");
            return Err(AppError::IndexOutOfRange { index, count });
        }

        audit(
            &pool.conn,
            "rmv",
            &user.to_string(),
            &format!(
                "Removed session #{} on {}: {} - {}",
                index,
                target.date_str(),
                target.clock_in_str(),
                target.clock_out_str()
            ),
        )?;

        Ok(target)
    }
}
