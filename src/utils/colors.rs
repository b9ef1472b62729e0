/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Warning count color: green below half the limit, yellow up to it, red at the limit.
pub fn color_for_warnings(count: i64, max: i64) -> &'static str {
    if count >= max {
        RED
    } else if count * 2 >= max {
        YELLOW
    } else {
        GREEN
    }
}
