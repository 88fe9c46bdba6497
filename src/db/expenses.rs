//! Queries for domestic expenses.

use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::expense::Expense;
use chrono::NaiveDate;
use rusqlite::{Connection, Result, Row, params};

/// Per-category slice of a month summary.
#[derive(Debug, Clone)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: f64,
}

/// Month-to-date expense summary.
#[derive(Debug, Clone, Default)]
pub struct ExpenseSummary {
    pub month_total: f64,
    pub transactions: i64,
    pub by_category: Vec<CategoryTotal>,
}

pub fn map_expense_row(row: &Row) -> Result<Expense> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let cat_str: String = row.get("category")?;
    let category = Category::from_db_str(&cat_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidCategory(cat_str.clone())),
        )
    })?;

    Ok(Expense {
        id: row.get("id")?,
        description: row.get("description")?,
        category,
        amount: row.get("amount")?,
        date,
        payment_method: row.get("payment_method")?,
        notes: row.get("notes")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_expense(conn: &Connection, exp: &Expense) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO expenses (description, category, amount, date, payment_method, notes, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            exp.description,
            exp.category.to_db_str(),
            exp.amount,
            exp.date_str(),
            exp.payment_method,
            exp.notes,
            exp.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn delete_expense(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM expenses WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::ExpenseNotFound(id));
    }
    Ok(())
}

/// All expenses, newest first; optionally restricted to one calendar month
/// via its "YYYY-MM" prefix.
pub fn list_expenses(conn: &Connection, month: Option<&str>) -> AppResult<Vec<Expense>> {
    let mut out = Vec::new();

    if let Some(m) = month {
        let mut stmt = conn.prepare(
            "SELECT * FROM expenses WHERE date LIKE ?1 ORDER BY date DESC, id DESC",
        )?;
        let rows = stmt.query_map([format!("{}%", m)], map_expense_row)?;
        for r in rows {
            out.push(r?);
        }
    } else {
        let mut stmt = conn.prepare("SELECT * FROM expenses ORDER BY date DESC, id DESC")?;
        let rows = stmt.query_map([], map_expense_row)?;
        for r in rows {
            out.push(r?);
        }
    }

    Ok(out)
}

/// Summary of everything spent since the given month start.
/// Every category appears in the output, zero or not, so tables stay stable.
pub fn summarize_since(conn: &Connection, month_start: NaiveDate) -> AppResult<ExpenseSummary> {
    let start = month_start.format("%Y-%m-%d").to_string();

    let (month_total, transactions) = conn.query_row(
        "SELECT COALESCE(SUM(amount), 0), COUNT(*) FROM expenses WHERE date >= ?1",
        [&start],
        |row| Ok((row.get::<_, f64>(0)?, row.get::<_, i64>(1)?)),
    )?;

    let mut stmt = conn.prepare(
        "SELECT category, SUM(amount) FROM expenses WHERE date >= ?1 GROUP BY category",
    )?;
    let rows = stmt.query_map([&start], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?))
    })?;

    let mut totals = Vec::new();
    for r in rows {
        totals.push(r?);
    }

    let by_category = Category::ALL
        .iter()
        .map(|&category| {
            let total = totals
                .iter()
                .find(|(name, _)| Category::from_db_str(name) == Some(category))
                .map(|(_, t)| *t)
                .unwrap_or(0.0);
            CategoryTotal { category, total }
        })
        .collect();

    Ok(ExpenseSummary {
        month_total,
        transactions,
        by_category,
    })
}
