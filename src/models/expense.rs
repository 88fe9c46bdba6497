use super::category::Category;
use chrono::{Local, NaiveDate};
use serde::Serialize;

/// A single domestic expense.
#[derive(Debug, Clone, Serialize)]
pub struct Expense {
    pub id: i64,
    pub description: String,      // ⇔ expenses.description
    pub category: Category,       // ⇔ expenses.category (TEXT)
    pub amount: f64,              // ⇔ expenses.amount
    pub date: NaiveDate,          // ⇔ expenses.date (TEXT "YYYY-MM-DD")
    pub payment_method: String,   // ⇔ expenses.payment_method
    pub notes: String,            // ⇔ expenses.notes (default '')
    pub created_at: String,       // ⇔ expenses.created_at (ISO8601)
}

impl Expense {
    pub fn new(
        description: &str,
        category: Category,
        amount: f64,
        date: NaiveDate,
        payment_method: &str,
        notes: &str,
    ) -> Self {
        Self {
            id: 0,
            description: description.to_string(),
            category,
            amount,
            date,
            payment_method: payment_method.to_string(),
            notes: notes.to_string(),
            created_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
