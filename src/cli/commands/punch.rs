use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::time::{parse_optional_time, parse_required_time};

/// Record, edit or delete a day of punches.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Punch {
        employee,
        date,
        clock_in,
        lunch_out,
        lunch_in,
        clock_out,
        edit,
        del,
    } = cmd
    else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;

    //
    // 1. Delete mode
    //
    if let Some(id) = del {
        return PunchLogic::delete(&mut pool, *id);
    }

    //
    // 2. Edit mode: recompute with the stored times as fallback
    //
    if let Some(id) = edit {
        return PunchLogic::edit(
            &mut pool,
            *id,
            parse_optional_time(clock_in.as_ref())?,
            parse_optional_time(lunch_out.as_ref())?,
            parse_optional_time(lunch_in.as_ref())?,
            parse_optional_time(clock_out.as_ref())?,
        );
    }

    //
    // 3. Record mode: everything is mandatory
    //
    let name = employee
        .as_deref()
        .ok_or_else(|| AppError::Other("missing employee name".into()))?;
    let date_raw = date
        .as_deref()
        .ok_or_else(|| AppError::InvalidDate("missing date".into()))?;
    let d = date::parse_date(date_raw)
        .ok_or_else(|| AppError::InvalidDate(date_raw.to_string()))?;

    let t_in = required(clock_in, "--in")?;
    let t_lunch_out = required(lunch_out, "--lunch-out")?;
    let t_lunch_in = required(lunch_in, "--lunch-in")?;
    let t_out = required(clock_out, "--out")?;

    PunchLogic::record(&mut pool, name, d, t_in, t_lunch_out, t_lunch_in, t_out)
}

fn required(
    value: &Option<String>,
    flag: &str,
) -> AppResult<chrono::NaiveTime> {
    let s = value
        .as_deref()
        .ok_or_else(|| AppError::InvalidTime(format!("missing {}", flag)))?;
    parse_required_time(s)
}
