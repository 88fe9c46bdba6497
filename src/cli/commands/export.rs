use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::period::ClosingPeriod;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::logic::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Export {
        format,
        file,
        employee,
        month,
        year,
        force,
    } = cmd
    else {
        return Ok(());
    };

    let period = match (month, year) {
        (Some(m), Some(y)) => {
            if !(1..=12).contains(m) {
                return Err(AppError::InvalidDate(format!("invalid month: {}", m)));
            }
            Some(ClosingPeriod::for_label(*m, *y))
        }
        _ => None,
    };

    let mut pool = DbPool::new(&cfg.database)?;
    ExportLogic::run(&mut pool, format, file, employee.as_deref(), period, *force)
}
