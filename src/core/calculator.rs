//! Duration arithmetic: every reported or summed duration is snapped to a
//! multiple of [`ROUNDING_STEP`] minutes.

use chrono::{NaiveDateTime, NaiveTime, TimeDelta};

pub const ROUNDING_STEP: i64 = 5;

/// Fractional minutes in `delta`.
pub fn delta_minutes(delta: TimeDelta) -> f64 {
    delta.num_milliseconds() as f64 / 60_000.0
}

/// Snap `minutes` to the nearest multiple of 5. Halfway values (x.5 steps)
/// round away from zero: 7.5 → 10, -7.5 → -10.
pub fn round_minutes(minutes: f64) -> i64 {
    let step = ROUNDING_STEP as f64;
    let steps = (minutes / step).round() as i64;
    steps * ROUNDING_STEP
}

/// Rounded minutes between two instants.
pub fn elapsed_rounded(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    round_minutes(delta_minutes(end - start))
}

/// Rounded minutes between two times of the same day. A clock-out earlier
/// than the clock-in yields a negative value, as stored.
pub fn session_minutes(clock_in: NaiveTime, clock_out: NaiveTime) -> i64 {
    round_minutes(delta_minutes(clock_out - clock_in))
}
