//! Formatting utilities used for CLI and report outputs.

use crate::config::Config;
use crate::models::UserId;

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 {
        "-"
    } else {
        ""
    };

    if short {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Roster name when known, otherwise the raw id.
pub fn display_user(cfg: &Config, user: UserId) -> String {
    match cfg.member(user) {
        Some(m) if !m.name.is_empty() => format!("{} ({})", m.name, user),
        _ => user.to_string(),
    }
}
