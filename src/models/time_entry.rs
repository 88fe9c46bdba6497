use crate::core::hours::DayHours;
use chrono::{Datelike, Local, NaiveDate, NaiveTime};
use serde::Serialize;

/// One day of punches for one employee, with the derived hour fields as
/// they were persisted (already rounded).
#[derive(Debug, Clone, Serialize)]
pub struct TimeEntry {
    pub id: i64,
    pub employee_id: i64,
    pub date: NaiveDate,        // ⇔ time_entries.date (TEXT "YYYY-MM-DD")
    pub clock_in: NaiveTime,    // ⇔ time_entries.clock_in (TEXT "HH:MM")
    pub lunch_out: NaiveTime,   // ⇔ time_entries.lunch_out
    pub lunch_in: NaiveTime,    // ⇔ time_entries.lunch_in
    pub clock_out: NaiveTime,   // ⇔ time_entries.clock_out
    pub lunch_hours: f64,       // ⇔ time_entries.lunch_hours
    pub worked_hours: f64,      // ⇔ time_entries.worked_hours
    pub overtime_hours: f64,    // ⇔ time_entries.overtime_hours
    pub created_at: String,     // ⇔ time_entries.created_at (ISO8601)
    pub edited_at: Option<String>, // ⇔ time_entries.edited_at
}

impl TimeEntry {
    pub fn new(
        employee_id: i64,
        date: NaiveDate,
        clock_in: NaiveTime,
        lunch_out: NaiveTime,
        lunch_in: NaiveTime,
        clock_out: NaiveTime,
        hours: DayHours,
    ) -> Self {
        Self {
            id: 0,
            employee_id,
            date,
            clock_in,
            lunch_out,
            lunch_in,
            clock_out,
            lunch_hours: hours.lunch_hours,
            worked_hours: hours.worked_hours,
            overtime_hours: hours.overtime_hours,
            created_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            edited_at: None,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Redundant day/month/year columns kept for ad hoc SQL, like the
    /// original schema had.
    pub fn dmy(&self) -> (u32, u32, i32) {
        (self.date.day(), self.date.month(), self.date.year())
    }

    /// Derived fields as a DayHours value (for in-memory aggregation).
    pub fn hours(&self) -> DayHours {
        DayHours {
            lunch_hours: self.lunch_hours,
            worked_hours: self.worked_hours,
            overtime_hours: self.overtime_hours,
        }
    }
}
