//! Period aggregation and monetary breakdown.

use crate::core::hours::{DayHours, STANDARD_DAY_HOURS};

/// Summed hours over a set of daily entries.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PeriodTotals {
    pub total_hours: f64,
    pub total_overtime_hours: f64,
    pub days_worked: i64,
}

/// Pay split for a period at a given hourly rate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PayBreakdown {
    pub normal_pay: f64,
    pub overtime_pay: f64,
}

impl PayBreakdown {
    pub fn total(&self) -> f64 {
        self.normal_pay + self.overtime_pay
    }
}

/// Sum derived day hours in memory. An empty slice yields the zero totals.
pub fn aggregate(days: &[DayHours]) -> PeriodTotals {
    let mut totals = PeriodTotals::default();
    for d in days {
        totals.total_hours += d.worked_hours;
        totals.total_overtime_hours += d.overtime_hours;
        totals.days_worked += 1;
    }
    totals
}

/// Monetary value of a set of daily entries.
///
/// Normal pay caps each day at the 8-hour standard; overtime is paid at a
/// flat 50% premium on top of the hourly rate. No tiered or holiday rates.
pub fn monetary_value(days: &[DayHours], hourly_rate: f64) -> PayBreakdown {
    let mut pay = PayBreakdown::default();
    for d in days {
        let normal = d.worked_hours.min(STANDARD_DAY_HOURS);
        pay.normal_pay += normal * hourly_rate;
        pay.overtime_pay += d.overtime_hours * hourly_rate * 1.5;
    }
    pay
}
