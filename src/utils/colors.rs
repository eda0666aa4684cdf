/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Streak color:
/// none → grey
/// 0 → red (incident today)
/// matching or beating the high score → green
/// otherwise → yellow
pub fn color_for_streak(streak: Option<i64>, high_score: i64) -> &'static str {
    match streak {
        None => GREY,
        Some(0) => RED,
        Some(s) if s >= high_score => GREEN,
        Some(_) => YELLOW,
    }
}

/// Grey for placeholder texts, untouched otherwise.
pub fn colorize_optional(value: &str, present: bool) -> String {
    if present {
        value.to_string()
    } else {
        format!("{GREY}{value}{RESET}")
    }
}
