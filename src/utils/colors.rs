/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const RED_BG: &str = "\x1b[41;97m";
pub const GREEN_BG: &str = "\x1b[42;97m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Balance color:
/// \>0 → green
/// \<0 → red
/// 0 → none
pub fn color_for_balance(value: i64) -> Option<&'static str> {
    if value > 0 {
        Some(GREEN)
    } else if value < 0 {
        Some(RED)
    } else {
        None
    }
}
