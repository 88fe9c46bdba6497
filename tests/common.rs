#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ht() -> Command {
    cargo_bin_cmd!("hometime")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hometime.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB, add one employee and a couple of entries useful for many tests.
/// Salary 1380 over the default 200 monthly hours gives a 6.90 hourly rate.
pub fn init_db_with_data(db_path: &str) {
    ht().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    ht().args([
        "--db", db_path, "employee", "add", "Maria", "--role", "Housekeeper", "--salary", "1380",
    ])
    .assert()
    .success();

    // ordinary 8h day (1h lunch)
    ht().args([
        "--db",
        db_path,
        "punch",
        "Maria",
        "2025-09-01",
        "--in",
        "08:00",
        "--lunch-out",
        "12:00",
        "--lunch-in",
        "13:00",
        "--out",
        "17:00",
    ])
    .assert()
    .success();

    // 9.5h day with 1.5h overtime
    ht().args([
        "--db",
        db_path,
        "punch",
        "Maria",
        "2025-09-15",
        "--in",
        "08:00",
        "--lunch-out",
        "12:00",
        "--lunch-in",
        "13:00",
        "--out",
        "18:30",
    ])
    .assert()
    .success();
}
