use chrono::Local;
use serde::Serialize;

/// A household employee.
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,          // ⇔ employees.name (TEXT UNIQUE)
    pub role: String,          // ⇔ employees.role
    pub monthly_salary: f64,   // ⇔ employees.monthly_salary
    pub hourly_rate: f64,      // ⇔ employees.hourly_rate (salary / monthly_hours)
    pub monthly_hours: i64,    // ⇔ employees.monthly_hours (divisor at creation time)
    pub discount: f64,         // ⇔ employees.discount (flat monthly deduction)
    pub active: bool,          // ⇔ employees.active (soft delete flag)
    pub created_at: String,    // ⇔ employees.created_at (ISO8601)
}

impl Employee {
    /// Build a new employee, deriving the hourly rate from the monthly
    /// salary and the configured monthly-hours divisor.
    pub fn new(name: &str, role: &str, monthly_salary: f64, monthly_hours: i64, discount: f64) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            role: role.to_string(),
            monthly_salary,
            hourly_rate: monthly_salary / monthly_hours as f64,
            monthly_hours,
            discount,
            active: true,
            created_at: Local::now().format("%Y-%m-%d").to_string(),
        }
    }
}
