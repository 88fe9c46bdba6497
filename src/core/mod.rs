pub mod aggregate;
pub mod format;
pub mod hours;
pub mod period;
pub mod punch;
pub mod report;
