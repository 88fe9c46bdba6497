//! Export orchestration: select rows, pick a writer, notify.

use crate::core::period::ClosingPeriod;
use crate::db::pool::DbPool;
use crate::db::queries::{
    find_employee, list_active_employees, load_all_entries, load_entries_in_range,
};
use crate::errors::AppResult;
use crate::export::model::EntryExport;
use crate::export::{ExportFormat, csv, ensure_writable, json, notify_export_success};
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    pub fn run(
        pool: &mut DbPool,
        format: &ExportFormat,
        file: &str,
        employee: Option<&str>,
        period: Option<ClosingPeriod>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let rows = collect_rows(pool, employee, period)?;

        match format {
            ExportFormat::Csv => csv::write_csv(file, &rows)?,
            ExportFormat::Json => json::write_json(file, &rows)?,
        }

        notify_export_success(format.as_str().to_uppercase().as_str(), path);
        Ok(())
    }
}

/// One export row per time entry, joined with the employee name.
fn collect_rows(
    pool: &mut DbPool,
    employee: Option<&str>,
    period: Option<ClosingPeriod>,
) -> AppResult<Vec<EntryExport>> {
    let employees = match employee {
        Some(name) => vec![find_employee(&pool.conn, name)?],
        None => list_active_employees(&pool.conn)?,
    };

    let mut rows = Vec::new();
    for emp in &employees {
        let entries = match period {
            Some(p) => load_entries_in_range(&pool.conn, emp.id, p.start, p.end)?,
            None => load_all_entries(&pool.conn, emp.id)?,
        };
        rows.extend(entries.iter().map(|e| EntryExport::from_entry(e, &emp.name)));
    }

    Ok(rows)
}
