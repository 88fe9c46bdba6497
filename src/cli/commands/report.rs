use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::format::format_hm;
use crate::core::period::ClosingPeriod;
use crate::core::report::{MONTH_NAMES, PeriodReport, build_period_report};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{CYAN, RESET, color_for_overtime};
use crate::utils::date;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Report {
        employee,
        month,
        year,
    } = cmd
    else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;

    let period = match (month, year) {
        (Some(m), Some(y)) => {
            if !(1..=12).contains(m) {
                return Err(AppError::InvalidDate(format!("invalid month: {}", m)));
            }
            ClosingPeriod::for_label(*m, *y)
        }
        _ => ClosingPeriod::for_date(date::today()),
    };

    let report = build_period_report(&mut pool, employee, period)?;
    print_report(&report);
    Ok(())
}

fn print_report(report: &PeriodReport) {
    let p = &report.period;
    let month_name = MONTH_NAMES[(p.month - 1) as usize];

    println!(
        "📅 {} — {} {} (period {} to {})",
        report.employee.name,
        month_name,
        p.year,
        p.start.format("%Y-%m-%d"),
        p.end.format("%Y-%m-%d"),
    );
    println!();

    if report.entries.is_empty() {
        println!("No entries in this period.");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("Date", 12),
        Column::new("In", 6),
        Column::new("Lunch", 12),
        Column::new("Out", 6),
        Column::new("Worked", 10),
        Column::new("Overtime", 10),
    ]);

    for e in &report.entries {
        table.add_row(vec![
            e.date_str(),
            e.clock_in.format("%H:%M").to_string(),
            format!(
                "{}-{}",
                e.lunch_out.format("%H:%M"),
                e.lunch_in.format("%H:%M")
            ),
            e.clock_out.format("%H:%M").to_string(),
            format_hm(e.worked_hours),
            format!(
                "{}{}{}",
                color_for_overtime(e.overtime_hours),
                format_hm(e.overtime_hours),
                RESET
            ),
        ]);
    }

    println!("{}", table.render());

    let t = &report.totals;
    println!(
        "{}Days worked:{} {}",
        CYAN, RESET, t.days_worked
    );
    println!(
        "{}Total hours:{} {} ({:.2}h)",
        CYAN,
        RESET,
        format_hm(t.total_hours),
        t.total_hours
    );
    println!(
        "{}Overtime:{}    {} ({:.2}h)",
        CYAN,
        RESET,
        format_hm(t.total_overtime_hours),
        t.total_overtime_hours
    );
    println!();
    println!(
        "{}Normal pay:{}   {:.2}",
        CYAN, RESET, report.pay.normal_pay
    );
    println!(
        "{}Overtime pay:{} {:.2} (rate x 1.5)",
        CYAN, RESET, report.pay.overtime_pay
    );
    println!(
        "{}Total pay:{}    {:.2}",
        CYAN,
        RESET,
        report.pay.total()
    );
}
