use super::UserId;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// One itemized line of a worked-time report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionDetail {
    /// 1-based position in the member's session list for the date
    /// (the same index `rmv` expects).
    pub index: usize,
    pub clock_in: NaiveTime,
    pub clock_out: NaiveTime,
    pub minutes: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserTotal {
    pub user_id: UserId,
    pub total_minutes: i64,
    pub details: Vec<SessionDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkedReport {
    pub date: NaiveDate,
    pub totals: Vec<UserTotal>,
}

impl WorkedReport {
    pub fn is_empty(&self) -> bool {
        self.totals.iter().all(|t| t.total_minutes <= 0)
    }
}
