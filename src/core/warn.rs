use crate::db::infractions::{get_count, set_count};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::UserId;

/// Per-member warning counter, capped at `max`.
pub struct InfractionLogic;

impl InfractionLogic {
    /// Add one warning; fails with `LimitReached` (count unchanged) at the cap.
    pub fn increment(pool: &mut DbPool, user: UserId, max: i64) -> AppResult<i64> {
        let current = get_count(&pool.conn, user)?;
        if current >= max {
            return Err(AppError::LimitReached {
                count: current,
                max,
            });
        }

        let next = current + 1;
        set_count(&pool.conn, user, next)?;
        audit(
            &pool.conn,
            "warn",
            &user.to_string(),
            &format!("Warning {}/{}", next, max),
        )?;
        Ok(next)
    }

    /// Back to zero, whatever the current count.
    pub fn reset(pool: &mut DbPool, user: UserId) -> AppResult<i64> {
        set_count(&pool.conn, user, 0)?;
        audit(&pool.conn, "reset", &user.to_string(), "Warnings reset")?;
        Ok(0)
    }

    pub fn query(pool: &mut DbPool, user: UserId) -> AppResult<i64> {
        get_count(&pool.conn, user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_up_to_the_limit_then_refuses() {
        let mut pool = DbPool::in_memory().unwrap();
        let counts: Vec<i64> = (0..5)
            .map(|_| InfractionLogic::increment(&mut pool, 11, 5).unwrap())
            .collect();
        assert_eq!(counts, vec![1, 2, 3, 4, 5]);

        let err = InfractionLogic::increment(&mut pool, 11, 5).unwrap_err();
        assert!(matches!(err, AppError::LimitReached { count: 5, max: 5 }));
        assert_eq!(InfractionLogic::query(&mut pool, 11).unwrap(), 5);
    }

    #[test]
    fn reset_returns_to_zero_from_any_value() {
        let mut pool = DbPool::in_memory().unwrap();
        assert_eq!(InfractionLogic::reset(&mut pool, 11).unwrap(), 0);

        InfractionLogic::increment(&mut pool, 11, 5).unwrap();
        InfractionLogic::increment(&mut pool, 11, 5).unwrap();
        assert_eq!(InfractionLogic::reset(&mut pool, 11).unwrap(), 0);
        assert_eq!(InfractionLogic::query(&mut pool, 11).unwrap(), 0);
        assert_eq!(InfractionLogic::increment(&mut pool, 11, 5).unwrap(), 1);
    }

    #[test]
    fn counters_are_per_member() {
        let mut pool = DbPool::in_memory().unwrap();
        InfractionLogic::increment(&mut pool, 1, 5).unwrap();
        assert_eq!(InfractionLogic::query(&mut pool, 2).unwrap(), 0);
    }
}
