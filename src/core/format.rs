//! Display formatting for fractional-hour values.

/// Convert decimal hours to a "2h 59min" style display string.
///
/// Minutes are rounded, not truncated: 2.9833h is 2h 59.0min and must render
/// as "2h 59min". Truncation would show 58min here, undercounting by up to a
/// minute. When rounding carries the minutes to 60, the hour is bumped.
pub fn format_hm(decimal_hours: f64) -> String {
    if decimal_hours == 0.0 {
        return "0h 0min".to_string();
    }

    let mut hours = decimal_hours.trunc() as i64;
    let mut minutes = ((decimal_hours - decimal_hours.trunc()) * 60.0).round() as i64;

    if minutes >= 60 {
        hours += 1;
        minutes = 0;
    }

    if hours > 0 && minutes > 0 {
        format!("{}h {}min", hours, minutes)
    } else if hours > 0 {
        format!("{}h", hours)
    } else {
        format!("{}min", minutes)
    }
}
