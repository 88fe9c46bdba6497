//! Idempotent schema creation and upgrades.
//!
//! Every migration step checks the current state before touching anything,
//! so running `init` on an existing database is always safe.

use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn create_employees_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            name           TEXT NOT NULL UNIQUE,
            role           TEXT NOT NULL DEFAULT '',
            monthly_salary REAL NOT NULL,
            hourly_rate    REAL NOT NULL,
            monthly_hours  INTEGER NOT NULL DEFAULT 200,
            discount       REAL NOT NULL DEFAULT 0,
            active         INTEGER NOT NULL DEFAULT 1,
            created_at     TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn create_time_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS time_entries (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id    INTEGER NOT NULL REFERENCES employees(id),
            date           TEXT NOT NULL,
            day            INTEGER NOT NULL,
            month          INTEGER NOT NULL,
            year           INTEGER NOT NULL,
            clock_in       TEXT NOT NULL,
            lunch_out      TEXT NOT NULL,
            lunch_in       TEXT NOT NULL,
            clock_out      TEXT NOT NULL,
            lunch_hours    REAL NOT NULL,
            worked_hours   REAL NOT NULL,
            overtime_hours REAL NOT NULL,
            created_at     TEXT NOT NULL,
            edited_at      TEXT,
            UNIQUE(employee_id, date)
        );

        CREATE INDEX IF NOT EXISTS idx_entries_employee_date ON time_entries(employee_id, date);
        CREATE INDEX IF NOT EXISTS idx_entries_date ON time_entries(date);
        "#,
    )?;
    Ok(())
}

fn create_expenses_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS expenses (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            description    TEXT NOT NULL,
            category       TEXT NOT NULL,
            amount         REAL NOT NULL,
            date           TEXT NOT NULL,
            payment_method TEXT NOT NULL,
            notes          TEXT DEFAULT '',
            created_at     TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses(date);
        "#,
    )?;
    Ok(())
}

/// Early employee rows predate the `discount` column.
fn migrate_add_discount_to_employees(conn: &Connection) -> Result<()> {
    if !table_exists(conn, "employees")? {
        return Ok(());
    }
    if table_has_column(conn, "employees", "discount")? {
        return Ok(());
    }

    conn.execute_batch("ALTER TABLE employees ADD COLUMN discount REAL NOT NULL DEFAULT 0;")?;
    success("Added 'discount' column to employees table.");
    Ok(())
}

/// Run all pending migrations in order.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    create_employees_table(conn)?;
    create_time_entries_table(conn)?;
    create_expenses_table(conn)?;
    migrate_add_discount_to_employees(conn)?;
    Ok(())
}
