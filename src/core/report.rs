//! Closing-period report assembly.
//!
//! Pulls the entries of one closing period, the SQL aggregate, and the
//! monetary breakdown into a single view model the CLI renders.

use crate::core::aggregate::{PayBreakdown, PeriodTotals, monetary_value};
use crate::core::hours::DayHours;
use crate::core::period::{ClosingPeriod, closing_label};
use crate::db::pool::DbPool;
use crate::db::queries::{
    find_employee, load_entries_in_range, load_entry_dates, sum_entries_in_range,
};
use crate::errors::AppResult;
use crate::models::employee::Employee;
use crate::models::time_entry::TimeEntry;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug)]
pub struct PeriodReport {
    pub employee: Employee,
    pub period: ClosingPeriod,
    pub entries: Vec<TimeEntry>,
    pub totals: PeriodTotals,
    pub pay: PayBreakdown,
}

/// Build the report for the closing period of an employee.
pub fn build_period_report(
    pool: &mut DbPool,
    employee_name: &str,
    period: ClosingPeriod,
) -> AppResult<PeriodReport> {
    let employee = find_employee(&pool.conn, employee_name)?;

    let entries = load_entries_in_range(&pool.conn, employee.id, period.start, period.end)?;
    let totals = sum_entries_in_range(&pool.conn, employee.id, period.start, period.end)?;

    let days: Vec<DayHours> = entries.iter().map(|e| e.hours()).collect();
    let pay = monetary_value(&days, employee.hourly_rate);

    Ok(PeriodReport {
        employee,
        period,
        entries,
        totals,
        pay,
    })
}

/// Distinct closing-period labels an employee has entries in, newest first.
pub fn worked_periods(pool: &mut DbPool, employee_name: &str) -> AppResult<Vec<(u32, i32)>> {
    let employee = find_employee(&pool.conn, employee_name)?;
    let dates = load_entry_dates(&pool.conn, employee.id)?;

    let mut labels: Vec<(i32, u32)> = dates
        .into_iter()
        .map(|d| {
            let (month, year) = closing_label(d);
            (year, month)
        })
        .collect();
    labels.sort_unstable();
    labels.dedup();
    labels.reverse();

    Ok(labels.into_iter().map(|(y, m)| (m, y)).collect())
}
