use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Create config + database files and run migrations.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    let cfg = if let Some(custom) = &cli.db {
        let mut c = Config::load();
        c.database = custom.clone();
        c
    } else {
        Config::load()
    };

    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;

    success("Database initialized.");
    Ok(())
}
