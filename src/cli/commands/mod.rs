pub mod config;
pub mod db;
pub mod employee;
pub mod expense;
pub mod export;
pub mod init;
pub mod periods;
pub mod punch;
pub mod report;
