//! Recurring reminder scheduling, decoupled from the attendance logic.
//!
//! The scheduler owns its timing state (interval and clock); the only shared
//! value is the persisted "last sent" timestamp.

use crate::db::pool::DbPool;
use crate::db::reminder::{load_last_sent, store_last_sent};
use crate::errors::AppResult;
use crate::utils::clock::Clock;
use crate::utils::time::truncate_to_seconds;
use chrono::{NaiveDateTime, TimeDelta};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Poll {
    /// The reminder must go out now; the send has been recorded.
    Due,
    /// Nothing to do before `next`.
    NotYet { next: NaiveDateTime },
}

pub struct ReminderScheduler<C: Clock> {
    interval: TimeDelta,
    clock: C,
}

impl<C: Clock> ReminderScheduler<C> {
    pub fn new(interval: TimeDelta, clock: C) -> Self {
        Self { interval, clock }
    }

    pub fn from_minutes(minutes: i64, clock: C) -> Self {
        Self::new(TimeDelta::minutes(minutes.max(1)), clock)
    }

    /// When the next reminder may be sent; `None` means immediately.
    pub fn next_eligible(&self, last_sent: Option<NaiveDateTime>) -> Option<NaiveDateTime> {
        last_sent.map(|t| t + self.interval)
    }

    pub fn is_due(&self, last_sent: Option<NaiveDateTime>) -> bool {
        match self.next_eligible(last_sent) {
            Some(next) => self.clock.now() >= next,
            None => true,
        }
    }

    /// Check the stored timestamp and record a send when one is due.
    pub fn poll(&self, pool: &mut DbPool) -> AppResult<Poll> {
        let last = load_last_sent(&pool.conn)?;

        if self.is_due(last) {
            let now = truncate_to_seconds(self.clock.now());
            store_last_sent(&pool.conn, &now)?;
            debug!(at = %now, "reminder due");
            return Ok(Poll::Due);
        }

        let next = self.next_eligible(last).unwrap_or_else(|| self.clock.now());
        Ok(Poll::NotYet { next })
    }

    /// Time left until `next`, zero when already past.
    pub fn wait_for(&self, next: NaiveDateTime) -> std::time::Duration {
        (next - self.clock.now())
            .to_std()
            .unwrap_or(std::time::Duration::ZERO)
    }
}
