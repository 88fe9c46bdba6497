use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for hometime
/// CLI application to track household working hours and expenses with SQLite
#[derive(Parser)]
#[command(
    name = "hometime",
    version = env!("CARGO_PKG_VERSION"),
    about = "A household timesheet and expense tracker: clock in/out, closing-period payroll totals, domestic expenses",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Manage the database (integrity checks, maintenance)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Manage household employees
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Record, edit or delete a day of punches
    Punch {
        /// Employee name (required unless --edit/--del)
        employee: Option<String>,

        /// Date of the entry (YYYY-MM-DD)
        date: Option<String>,

        /// Clock-in time (HH:MM)
        #[arg(long = "in", help = "Clock-in time (HH:MM)")]
        clock_in: Option<String>,

        /// Lunch break start (HH:MM)
        #[arg(long = "lunch-out", help = "Leaving for lunch (HH:MM)")]
        lunch_out: Option<String>,

        /// Lunch break end (HH:MM)
        #[arg(long = "lunch-in", help = "Back from lunch (HH:MM)")]
        lunch_in: Option<String>,

        /// Clock-out time (HH:MM)
        #[arg(long = "out", help = "Clock-out time (HH:MM)")]
        clock_out: Option<String>,

        /// Edit an existing entry instead of creating a new one
        #[arg(long = "edit", value_name = "ID", conflicts_with = "del")]
        edit: Option<i64>,

        /// Delete an entry by id
        #[arg(long = "del", value_name = "ID")]
        del: Option<i64>,
    },

    /// Closing-period report (26th through 25th) for an employee
    Report {
        /// Employee name
        employee: String,

        /// Closing month (1-12); defaults to the current period
        #[arg(long, requires = "year")]
        month: Option<u32>,

        /// Closing year
        #[arg(long, requires = "month")]
        year: Option<i32>,
    },

    /// List the closing periods an employee has entries in
    Periods {
        /// Employee name
        employee: String,
    },

    /// Manage domestic expenses
    Expense {
        #[command(subcommand)]
        action: ExpenseAction,
    },

    /// Export time entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Restrict to one employee
        #[arg(long)]
        employee: Option<String>,

        /// Closing month to export (1-12, with --year)
        #[arg(long, requires = "year")]
        month: Option<u32>,

        /// Closing year to export (with --month)
        #[arg(long, requires = "month")]
        year: Option<i32>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// Add a new employee
    Add {
        name: String,

        #[arg(long, default_value = "")]
        role: String,

        /// Monthly salary; the hourly rate is salary / monthly_hours
        #[arg(long)]
        salary: f64,

        /// Flat monthly deduction
        #[arg(long, default_value_t = 0.0)]
        discount: f64,
    },

    /// Edit an existing employee
    Edit {
        name: String,

        #[arg(long = "rename", value_name = "NEW_NAME")]
        new_name: Option<String>,

        #[arg(long)]
        role: Option<String>,

        #[arg(long)]
        salary: Option<f64>,

        #[arg(long)]
        discount: Option<f64>,
    },

    /// List active employees
    List,

    /// Deactivate an employee (history is kept)
    Remove { name: String },
}

#[derive(Subcommand)]
pub enum ExpenseAction {
    /// Add a domestic expense
    Add {
        description: String,

        /// groceries, housing, transport, health, leisure or other
        #[arg(long)]
        category: String,

        #[arg(long)]
        amount: f64,

        /// Expense date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,

        #[arg(long, default_value = "cash")]
        payment: String,

        #[arg(long, default_value = "")]
        notes: String,
    },

    /// List expenses, optionally for one calendar month
    List {
        /// Calendar month filter (YYYY-MM)
        #[arg(long)]
        month: Option<String>,
    },

    /// Delete an expense by id
    Del { id: i64 },

    /// Month-to-date totals per category and remaining budget
    Summary,
}
