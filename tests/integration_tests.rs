use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{ht, init_db_with_data, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init");

    ht().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized."));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_employee_add_and_list() {
    let db_path = setup_test_db("employee_add_list");

    ht().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    ht().args([
        "--db", &db_path, "employee", "add", "Maria", "--role", "Housekeeper", "--salary", "1380",
    ])
    .assert()
    .success()
    .stdout(contains("6.90"));

    ht().args(["--db", &db_path, "employee", "list"])
        .assert()
        .success()
        .stdout(contains("Maria"))
        .stdout(contains("Housekeeper"));
}

#[test]
fn test_duplicate_employee_rejected() {
    let db_path = setup_test_db("employee_dup");

    ht().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    ht().args(["--db", &db_path, "employee", "add", "Maria", "--salary", "1380"])
        .assert()
        .success();

    ht().args(["--db", &db_path, "employee", "add", "Maria", "--salary", "1500"])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn test_removed_employee_disappears_from_list() {
    let db_path = setup_test_db("employee_remove");
    init_db_with_data(&db_path);

    ht().args(["--db", &db_path, "employee", "remove", "Maria"])
        .assert()
        .success();

    ht().args(["--db", &db_path, "employee", "list"])
        .assert()
        .success()
        .stdout(contains("Maria").not());
}

#[test]
fn test_punch_records_hours() {
    let db_path = setup_test_db("punch_record");
    init_db_with_data(&db_path);

    // init_db_with_data already punched 2025-09-15 as a 9.5h day
    ht().args([
        "--db",
        &db_path,
        "punch",
        "Maria",
        "2025-09-20",
        "--in",
        "09:00",
        "--lunch-out",
        "12:30",
        "--lunch-in",
        "13:30",
        "--out",
        "18:00",
    ])
    .assert()
    .success()
    .stdout(contains("worked 8.00h"));
}

#[test]
fn test_punch_rejects_duplicate_day() {
    let db_path = setup_test_db("punch_dup");
    init_db_with_data(&db_path);

    ht().args([
        "--db",
        &db_path,
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
    .failure()
    .stderr(contains("already exists"));
}

#[test]
fn test_punch_rejects_out_of_order_times() {
    let db_path = setup_test_db("punch_order");
    init_db_with_data(&db_path);

    ht().args([
        "--db",
        &db_path,
        "punch",
        "Maria",
        "2025-09-21",
        "--in",
        "17:00",
        "--lunch-out",
        "12:00",
        "--lunch-in",
        "13:00",
        "--out",
        "08:00",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid time range"));
}

#[test]
fn test_punch_unknown_employee_fails() {
    let db_path = setup_test_db("punch_unknown");

    ht().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    ht().args([
        "--db",
        &db_path,
        "punch",
        "Nobody",
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
    .failure()
    .stderr(contains("Employee not found"));
}

#[test]
fn test_punch_edit_recomputes_hours() {
    let db_path = setup_test_db("punch_edit");
    init_db_with_data(&db_path);

    // first inserted entry gets id 1; push clock-out one hour later
    ht().args([
        "--db", &db_path, "punch", "--edit", "1", "--out", "18:00",
    ])
    .assert()
    .success()
    .stdout(contains("worked 9.00h"))
    .stdout(contains("overtime 1.00h"));
}

#[test]
fn test_punch_delete_removes_entry() {
    let db_path = setup_test_db("punch_del");
    init_db_with_data(&db_path);

    ht().args(["--db", &db_path, "punch", "--del", "1"])
        .assert()
        .success()
        .stdout(contains("Deleted entry 1"));

    ht().args(["--db", &db_path, "punch", "--del", "1"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn test_report_shows_period_totals() {
    let db_path = setup_test_db("report_totals");
    init_db_with_data(&db_path);

    // both entries (Sep 1 and Sep 15) fall in the September 2025 closing
    // period: 2025-08-26 .. 2025-09-25
    ht().args([
        "--db", &db_path, "report", "Maria", "--month", "9", "--year", "2025",
    ])
    .assert()
    .success()
    .stdout(contains("2025-08-26"))
    .stdout(contains("2025-09-25"))
    .stdout(contains("2025-09-01"))
    .stdout(contains("2025-09-15"))
    .stdout(contains("Days worked:"))
    .stdout(contains("17h 30min"))
    .stdout(contains("1h 30min"));
}

#[test]
fn test_report_monetary_breakdown() {
    let db_path = setup_test_db("report_money");
    init_db_with_data(&db_path);

    // rate 6.90/h: normal = 8h + 8h capped = 110.40, overtime = 1.5h x 6.90 x 1.5
    ht().args([
        "--db", &db_path, "report", "Maria", "--month", "9", "--year", "2025",
    ])
    .assert()
    .success()
    .stdout(contains("110.40"))
    .stdout(contains("15.5"));
}

#[test]
fn test_report_empty_period() {
    let db_path = setup_test_db("report_empty");
    init_db_with_data(&db_path);

    ht().args([
        "--db", &db_path, "report", "Maria", "--month", "3", "--year", "2024",
    ])
    .assert()
    .success()
    .stdout(contains("No entries in this period."));
}

#[test]
fn test_report_december_january_boundary() {
    let db_path = setup_test_db("report_newyear");
    init_db_with_data(&db_path);

    // Dec 26 belongs to the January closing period of the NEXT year
    ht().args([
        "--db",
        &db_path,
        "punch",
        "Maria",
        "2025-12-26",
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

    ht().args([
        "--db", &db_path, "report", "Maria", "--month", "1", "--year", "2026",
    ])
    .assert()
    .success()
    .stdout(contains("2025-12-26"))
    .stdout(contains("8h"));
}

#[test]
fn test_periods_lists_closing_labels() {
    let db_path = setup_test_db("periods_labels");
    init_db_with_data(&db_path);

    // 2025-09-26 opens the October period
    ht().args([
        "--db",
        &db_path,
        "punch",
        "Maria",
        "2025-09-26",
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

    ht().args(["--db", &db_path, "periods", "Maria"])
        .assert()
        .success()
        .stdout(contains("September 2025"))
        .stdout(contains("October 2025"));
}
