use crate::models::time_entry::TimeEntry;
use serde::Serialize;

/// Flat row for time-entry export.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub id: i64,
    pub employee: String,
    pub date: String,
    pub clock_in: String,
    pub lunch_out: String,
    pub lunch_in: String,
    pub clock_out: String,
    pub lunch_hours: f64,
    pub worked_hours: f64,
    pub overtime_hours: f64,
}

impl EntryExport {
    pub fn from_entry(entry: &TimeEntry, employee: &str) -> Self {
        Self {
            id: entry.id,
            employee: employee.to_string(),
            date: entry.date_str(),
            clock_in: entry.clock_in.format("%H:%M").to_string(),
            lunch_out: entry.lunch_out.format("%H:%M").to_string(),
            lunch_in: entry.lunch_in.format("%H:%M").to_string(),
            clock_out: entry.clock_out.format("%H:%M").to_string(),
            lunch_hours: entry.lunch_hours,
            worked_hours: entry.worked_hours,
            overtime_hours: entry.overtime_hours,
        }
    }
}
