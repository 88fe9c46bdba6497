use crate::cli::parser::{Commands, ExpenseAction};
use crate::config::Config;
use crate::db::expenses::{
    ExpenseSummary, delete_expense, insert_expense, list_expenses, summarize_since,
};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::expense::Expense;
use crate::ui::messages::success;
use crate::utils::colors::{CYAN, RESET, color_for_budget};
use crate::utils::date;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Expense { action } = cmd else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;

    match action {
        ExpenseAction::Add {
            description,
            category,
            amount,
            date: date_raw,
            payment,
            notes,
        } => {
            let cat = Category::from_db_str(category)
                .ok_or_else(|| AppError::InvalidCategory(category.clone()))?;

            if *amount <= 0.0 {
                return Err(AppError::InvalidAmount(format!("{}", amount)));
            }

            let d = match date_raw {
                Some(s) => date::parse_date(s)
                    .ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
                None => date::today(),
            };

            let exp = Expense::new(description, cat, *amount, d, payment, notes);
            insert_expense(&pool.conn, &exp)?;
            success(format!(
                "Expense \"{}\" of {:.2} added ({}).",
                exp.description,
                exp.amount,
                cat.label()
            ));
        }

        ExpenseAction::List { month } => {
            if let Some(m) = month
                && date::parse_year_month(m).is_none()
            {
                return Err(AppError::InvalidDate(m.clone()));
            }

            let expenses = list_expenses(&pool.conn, month.as_deref())?;
            if expenses.is_empty() {
                println!("No expenses found.");
                return Ok(());
            }
            print_expenses(&expenses);
        }

        ExpenseAction::Del { id } => {
            delete_expense(&pool.conn, *id)?;
            success(format!("Deleted expense {}", id));
        }

        ExpenseAction::Summary => {
            let start = date::month_start(date::today());
            let summary = summarize_since(&pool.conn, start)?;
            print_summary(&summary, cfg.monthly_budget);
        }
    }

    Ok(())
}

fn print_expenses(expenses: &[Expense]) {
    let mut table = Table::new(vec![
        Column::new("Id", 5),
        Column::new("Date", 12),
        Column::new("Category", 11),
        Column::new("Amount", 10),
        Column::new("Payment", 10),
        Column::new("Description", 28),
    ]);

    for e in expenses {
        table.add_row(vec![
            e.id.to_string(),
            e.date_str(),
            e.category.label().to_string(),
            format!("{:.2}", e.amount),
            e.payment_method.clone(),
            e.description.clone(),
        ]);
    }

    println!("{}", table.render());
}

fn print_summary(summary: &ExpenseSummary, budget: f64) {
    let remaining = budget - summary.month_total;

    println!("💰 Month to date");
    println!();

    for slice in &summary.by_category {
        println!(
            "  {:<11} {:>10.2}",
            slice.category.label(),
            slice.total
        );
    }

    println!();
    println!(
        "{}Spent:{}        {:.2} over {} transactions",
        CYAN, RESET, summary.month_total, summary.transactions
    );
    println!(
        "{}Budget left:{}  {}{:.2}{}",
        CYAN,
        RESET,
        color_for_budget(remaining),
        remaining,
        RESET
    );
}
