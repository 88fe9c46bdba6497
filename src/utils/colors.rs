/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Overtime color:
/// \>0 → yellow
/// 0 → grey
pub fn color_for_overtime(value: f64) -> &'static str {
    if value > 0.0 { YELLOW } else { GREY }
}

/// Budget color:
/// \>=0 remaining → green
/// overspent → red
pub fn color_for_budget(remaining: f64) -> &'static str {
    if remaining >= 0.0 { GREEN } else { RED }
}
