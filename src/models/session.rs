use super::UserId;
use crate::core::calculator::session_minutes;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// One clock-in/clock-out pair of a member on a calendar date.
///
/// Identity for lookup and deletion is `(user_id, date, clock_in)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub user_id: UserId,
    pub date: NaiveDate,             // ⇔ clock_times.date (TEXT "YYYY-MM-DD")
    pub clock_in: NaiveTime,         // ⇔ clock_times.clock_in (TEXT "HH:MM:SS")
    pub clock_out: Option<NaiveTime>, // ⇔ clock_times.clock_out (NULL while open)
}

impl Session {
    pub fn open(user_id: UserId, date: NaiveDate, clock_in: NaiveTime) -> Self {
        Self {
            user_id,
            date,
            clock_in,
            clock_out: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }

    /// Rounded worked minutes, `None` while the session is still open.
    pub fn rounded_minutes(&self) -> Option<i64> {
        self.clock_out.map(|out| session_minutes(self.clock_in, out))
    }

    pub fn started_at(&self) -> NaiveDateTime {
        self.date.and_time(self.clock_in)
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn clock_in_str(&self) -> String {
        self.clock_in.format("%H:%M:%S").to_string()
    }

    pub fn clock_out_str(&self) -> String {
        self.clock_out
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "--:--:--".to_string())
    }
}
