pub mod category;
pub mod employee;
pub mod expense;
pub mod time_entry;
