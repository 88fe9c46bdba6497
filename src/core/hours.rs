//! Daily worked/lunch/overtime computation from the four punch times.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

/// Hours beyond this count as overtime.
pub const STANDARD_DAY_HOURS: f64 = 8.0;

/// Derived fields of a single day, all in fractional hours.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DayHours {
    pub lunch_hours: f64,
    pub worked_hours: f64,
    pub overtime_hours: f64,
}

/// Compute the derived hours of one day from its punch quadruple.
///
/// All four times share one calendar date. The quadruple must be strictly
/// ordered `clock_in < lunch_out < lunch_in < clock_out`; anything else
/// would yield negative durations and is rejected before persistence.
pub fn compute_day(
    clock_in: NaiveTime,
    lunch_out: NaiveTime,
    lunch_in: NaiveTime,
    clock_out: NaiveTime,
) -> AppResult<DayHours> {
    if !(clock_in < lunch_out && lunch_out < lunch_in && lunch_in < clock_out) {
        return Err(AppError::InvalidRange(format!(
            "expected clock-in < lunch-out < lunch-in < clock-out, got {} {} {} {}",
            clock_in.format("%H:%M"),
            lunch_out.format("%H:%M"),
            lunch_in.format("%H:%M"),
            clock_out.format("%H:%M"),
        )));
    }

    let morning = hours_between(clock_in, lunch_out);
    let afternoon = hours_between(lunch_in, clock_out);
    let worked_hours = morning + afternoon;

    Ok(DayHours {
        lunch_hours: hours_between(lunch_out, lunch_in),
        worked_hours,
        overtime_hours: overtime(worked_hours),
    })
}

/// Overtime is whatever exceeds the standard day, never negative.
pub fn overtime(worked_hours: f64) -> f64 {
    if worked_hours > STANDARD_DAY_HOURS {
        worked_hours - STANDARD_DAY_HOURS
    } else {
        0.0
    }
}

/// Round a fractional-hours value to `places` decimal places.
/// Entries are stored at 4 places on create and 2 on edit.
pub fn round_hours(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

fn hours_between(start: NaiveTime, end: NaiveTime) -> f64 {
    (end - start).num_seconds() as f64 / 3600.0
}
