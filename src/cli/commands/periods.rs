use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{MONTH_NAMES, worked_periods};
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// List the closing-period labels an employee has entries in.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Periods { employee } = cmd else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;
    let labels = worked_periods(&mut pool, employee)?;

    if labels.is_empty() {
        println!("No entries for {}.", employee);
        return Ok(());
    }

    println!("📅 Closing periods for {}:", employee);
    for (month, year) in labels {
        println!("  {} {}  ({:02}/{})", MONTH_NAMES[(month - 1) as usize], year, month, year);
    }

    Ok(())
}
