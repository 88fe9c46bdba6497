//! Queries for employees and time entries.

use crate::core::aggregate::PeriodTotals;
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::time_entry::TimeEntry;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

// ---------------------------------------------------------------------------
// Employees
// ---------------------------------------------------------------------------

pub fn map_employee_row(row: &Row) -> Result<Employee> {
    Ok(Employee {
        id: row.get("id")?,
        name: row.get("name")?,
        role: row.get("role")?,
        monthly_salary: row.get("monthly_salary")?,
        hourly_rate: row.get("hourly_rate")?,
        monthly_hours: row.get("monthly_hours")?,
        discount: row.get("discount")?,
        active: row.get::<_, i64>("active")? == 1,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_employee(conn: &Connection, emp: &Employee) -> AppResult<i64> {
    let res = conn.execute(
        "INSERT INTO employees (name, role, monthly_salary, hourly_rate, monthly_hours, discount, active, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, 1, ?7)",
        params![
            emp.name,
            emp.role,
            emp.monthly_salary,
            emp.hourly_rate,
            emp.monthly_hours,
            emp.discount,
            emp.created_at,
        ],
    );

    match res {
        Ok(_) => Ok(conn.last_insert_rowid()),
        Err(e) if is_unique_violation(&e) => Err(AppError::DuplicateEmployee(emp.name.clone())),
        Err(e) => Err(e.into()),
    }
}

pub fn update_employee(conn: &Connection, emp: &Employee) -> AppResult<()> {
    let res = conn.execute(
        "UPDATE employees
         SET name = ?1, role = ?2, monthly_salary = ?3,
             hourly_rate = ?4, monthly_hours = ?5, discount = ?6
         WHERE id = ?7",
        params![
            emp.name,
            emp.role,
            emp.monthly_salary,
            emp.hourly_rate,
            emp.monthly_hours,
            emp.discount,
            emp.id,
        ],
    );

    match res {
        Ok(_) => Ok(()),
        Err(e) if is_unique_violation(&e) => Err(AppError::DuplicateEmployee(emp.name.clone())),
        Err(e) => Err(e.into()),
    }
}

/// Look up an active employee by name.
pub fn find_employee(conn: &Connection, name: &str) -> AppResult<Employee> {
    let mut stmt =
        conn.prepare("SELECT * FROM employees WHERE name = ?1 AND active = 1")?;
    stmt.query_row([name], map_employee_row)
        .optional()?
        .ok_or_else(|| AppError::EmployeeNotFound(name.to_string()))
}

pub fn list_active_employees(conn: &Connection) -> AppResult<Vec<Employee>> {
    let mut stmt =
        conn.prepare("SELECT * FROM employees WHERE active = 1 ORDER BY name")?;
    let rows = stmt.query_map([], map_employee_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Soft delete: the row stays for historical reports.
pub fn deactivate_employee(conn: &Connection, name: &str) -> AppResult<()> {
    let emp = find_employee(conn, name)?;
    conn.execute("UPDATE employees SET active = 0 WHERE id = ?1", [emp.id])?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Time entries
// ---------------------------------------------------------------------------

pub fn map_entry_row(row: &Row) -> Result<TimeEntry> {
    let date_str: String = row.get("date")?;
    let date = parse_date_col(&date_str)?;

    Ok(TimeEntry {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        date,
        clock_in: parse_time_col(&row.get::<_, String>("clock_in")?)?,
        lunch_out: parse_time_col(&row.get::<_, String>("lunch_out")?)?,
        lunch_in: parse_time_col(&row.get::<_, String>("lunch_in")?)?,
        clock_out: parse_time_col(&row.get::<_, String>("clock_out")?)?,
        lunch_hours: row.get("lunch_hours")?,
        worked_hours: row.get("worked_hours")?,
        overtime_hours: row.get("overtime_hours")?,
        created_at: row.get("created_at")?,
        edited_at: row.get("edited_at")?,
    })
}

pub fn insert_entry(conn: &Connection, entry: &TimeEntry, employee_name: &str) -> AppResult<i64> {
    let (day, month, year) = entry.dmy();

    let res = conn.execute(
        "INSERT INTO time_entries
         (employee_id, date, day, month, year, clock_in, lunch_out, lunch_in, clock_out,
          lunch_hours, worked_hours, overtime_hours, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params![
            entry.employee_id,
            entry.date_str(),
            day,
            month,
            year,
            entry.clock_in.format("%H:%M").to_string(),
            entry.lunch_out.format("%H:%M").to_string(),
            entry.lunch_in.format("%H:%M").to_string(),
            entry.clock_out.format("%H:%M").to_string(),
            entry.lunch_hours,
            entry.worked_hours,
            entry.overtime_hours,
            entry.created_at,
        ],
    );

    match res {
        Ok(_) => Ok(conn.last_insert_rowid()),
        Err(e) if is_unique_violation(&e) => Err(AppError::DuplicateEntry {
            name: employee_name.to_string(),
            date: entry.date_str(),
        }),
        Err(e) => Err(e.into()),
    }
}

/// Update the punch times and derived fields of an existing entry.
pub fn update_entry(conn: &Connection, entry: &TimeEntry) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE time_entries
         SET clock_in = ?1, lunch_out = ?2, lunch_in = ?3, clock_out = ?4,
             lunch_hours = ?5, worked_hours = ?6, overtime_hours = ?7, edited_at = ?8
         WHERE id = ?9",
        params![
            entry.clock_in.format("%H:%M").to_string(),
            entry.lunch_out.format("%H:%M").to_string(),
            entry.lunch_in.format("%H:%M").to_string(),
            entry.clock_out.format("%H:%M").to_string(),
            entry.lunch_hours,
            entry.worked_hours,
            entry.overtime_hours,
            entry.edited_at,
            entry.id,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::EntryNotFound(entry.id));
    }
    Ok(())
}

pub fn load_entry_by_id(conn: &Connection, id: i64) -> AppResult<TimeEntry> {
    let mut stmt = conn.prepare("SELECT * FROM time_entries WHERE id = ?1")?;
    stmt.query_row([id], map_entry_row)
        .optional()?
        .ok_or(AppError::EntryNotFound(id))
}

pub fn delete_entry(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM time_entries WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::EntryNotFound(id));
    }
    Ok(())
}

/// Entries for one employee inside a closed date range, oldest first.
pub fn load_entries_in_range(
    conn: &Connection,
    employee_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<TimeEntry>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM time_entries
         WHERE employee_id = ?1 AND date >= ?2 AND date <= ?3
         ORDER BY date ASC",
    )?;

    let rows = stmt.query_map(
        params![
            employee_id,
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string(),
        ],
        map_entry_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// All entries for one employee, newest first.
pub fn load_all_entries(conn: &Connection, employee_id: i64) -> AppResult<Vec<TimeEntry>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM time_entries WHERE employee_id = ?1 ORDER BY date DESC",
    )?;
    let rows = stmt.query_map([employee_id], map_entry_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Sum worked/overtime hours over a closed date range in SQL.
/// NULL sums (no rows) coalesce to the zero aggregate; never an error.
pub fn sum_entries_in_range(
    conn: &Connection,
    employee_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<PeriodTotals> {
    let mut stmt = conn.prepare(
        "SELECT
            COALESCE(SUM(worked_hours), 0),
            COALESCE(SUM(overtime_hours), 0),
            COUNT(*)
         FROM time_entries
         WHERE employee_id = ?1 AND date >= ?2 AND date <= ?3",
    )?;

    let totals = stmt.query_row(
        params![
            employee_id,
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string(),
        ],
        |row| {
            Ok(PeriodTotals {
                total_hours: row.get(0)?,
                total_overtime_hours: row.get(1)?,
                days_worked: row.get(2)?,
            })
        },
    )?;

    Ok(totals)
}

/// Distinct entry dates for one employee, newest first.
/// Used to bucket history into closing-period labels.
pub fn load_entry_dates(conn: &Connection, employee_id: i64) -> AppResult<Vec<NaiveDate>> {
    let mut stmt = conn.prepare(
        "SELECT DISTINCT date FROM time_entries WHERE employee_id = ?1 ORDER BY date DESC",
    )?;
    let rows = stmt.query_map([employee_id], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(parse_date_col(&r?)?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Column helpers
// ---------------------------------------------------------------------------

fn is_unique_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

fn parse_date_col(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(s.to_string())),
        )
    })
}

fn parse_time_col(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(s.to_string())),
        )
    })
}
