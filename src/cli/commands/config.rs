use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::fs;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if *print_config {
            let path = Config::config_file();
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "config file not found: {} (run 'hometime init' first)",
                    path.display()
                )));
            }
            let content = fs::read_to_string(&path)?;
            println!("{}", content);
        }
    }
    Ok(())
}
