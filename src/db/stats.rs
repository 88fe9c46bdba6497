use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

/// Print database information for `db --info`.
pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    let employees: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM employees WHERE active = 1", [], |row| {
            row.get(0)
        })?;
    let entries: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM time_entries", [], |row| row.get(0))?;
    let expenses: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?;

    println!(
        "{}• Active employees:{} {}{}{}",
        CYAN, RESET, GREEN, employees, RESET
    );
    println!(
        "{}• Time entries:{} {}{}{}",
        CYAN, RESET, GREEN, entries, RESET
    );
    println!(
        "{}• Expenses:{} {}{}{}",
        CYAN, RESET, GREEN, expenses, RESET
    );

    //
    // 3) ENTRY DATE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM time_entries ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM time_entries ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Entry date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
