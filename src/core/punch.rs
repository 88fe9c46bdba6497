//! High-level business logic for the `punch` command.

use crate::core::hours::{compute_day, round_hours};
use crate::db::pool::DbPool;
use crate::db::queries::{
    delete_entry, find_employee, insert_entry, load_entry_by_id, update_entry,
};
use crate::errors::AppResult;
use crate::models::time_entry::TimeEntry;
use crate::ui::messages::success;
use chrono::{Local, NaiveDate, NaiveTime};

pub struct PunchLogic;

impl PunchLogic {
    /// Record a new day of punches for an employee.
    /// Derived hours are stored at 4 decimal places to keep precision for
    /// later aggregation; display rounding happens only at report time.
    pub fn record(
        pool: &mut DbPool,
        employee_name: &str,
        date: NaiveDate,
        clock_in: NaiveTime,
        lunch_out: NaiveTime,
        lunch_in: NaiveTime,
        clock_out: NaiveTime,
    ) -> AppResult<()> {
        let employee = find_employee(&pool.conn, employee_name)?;

        let mut hours = compute_day(clock_in, lunch_out, lunch_in, clock_out)?;
        hours.lunch_hours = round_hours(hours.lunch_hours, 4);
        hours.worked_hours = round_hours(hours.worked_hours, 4);
        hours.overtime_hours = round_hours(hours.overtime_hours, 4);

        let entry = TimeEntry::new(
            employee.id,
            date,
            clock_in,
            lunch_out,
            lunch_in,
            clock_out,
            hours,
        );
        insert_entry(&pool.conn, &entry, &employee.name)?;

        success(format!(
            "Recorded {} for {}: worked {:.2}h, overtime {:.2}h, lunch {:.2}h",
            entry.date_str(),
            employee.name,
            hours.worked_hours,
            hours.overtime_hours,
            hours.lunch_hours,
        ));
        Ok(())
    }

    /// Recompute and update an existing entry. Times not given keep their
    /// stored value. Derived hours are re-rounded at 2 decimal places here,
    /// matching the precision the edit path always used.
    pub fn edit(
        pool: &mut DbPool,
        id: i64,
        clock_in: Option<NaiveTime>,
        lunch_out: Option<NaiveTime>,
        lunch_in: Option<NaiveTime>,
        clock_out: Option<NaiveTime>,
    ) -> AppResult<()> {
        let mut entry = load_entry_by_id(&pool.conn, id)?;

        if let Some(t) = clock_in {
            entry.clock_in = t;
        }
        if let Some(t) = lunch_out {
            entry.lunch_out = t;
        }
        if let Some(t) = lunch_in {
            entry.lunch_in = t;
        }
        if let Some(t) = clock_out {
            entry.clock_out = t;
        }

        let hours = compute_day(entry.clock_in, entry.lunch_out, entry.lunch_in, entry.clock_out)?;
        entry.lunch_hours = round_hours(hours.lunch_hours, 2);
        entry.worked_hours = round_hours(hours.worked_hours, 2);
        entry.overtime_hours = round_hours(hours.overtime_hours, 2);
        entry.edited_at = Some(Local::now().format("%Y-%m-%d %H:%M:%S").to_string());

        update_entry(&pool.conn, &entry)?;

        success(format!(
            "Updated entry {}: worked {:.2}h, overtime {:.2}h",
            id, entry.worked_hours, entry.overtime_hours,
        ));
        Ok(())
    }

    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<()> {
        delete_entry(&pool.conn, id)?;
        success(format!("Deleted entry {}", id));
        Ok(())
    }
}
