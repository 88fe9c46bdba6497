use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{ht, setup_test_db};

fn init(db_path: &str) {
    ht().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

#[test]
fn test_expense_add_and_list() {
    let db_path = setup_test_db("expense_add");
    init(&db_path);

    ht().args([
        "--db",
        &db_path,
        "expense",
        "add",
        "Weekly groceries",
        "--category",
        "groceries",
        "--amount",
        "230.50",
        "--date",
        "2025-09-03",
        "--payment",
        "card",
    ])
    .assert()
    .success()
    .stdout(contains("230.50"));

    ht().args(["--db", &db_path, "expense", "list"])
        .assert()
        .success()
        .stdout(contains("Weekly groceries"))
        .stdout(contains("Groceries"))
        .stdout(contains("2025-09-03"));
}

#[test]
fn test_expense_list_month_filter() {
    let db_path = setup_test_db("expense_month");
    init(&db_path);

    ht().args([
        "--db", &db_path, "expense", "add", "Bus pass", "--category", "transport", "--amount",
        "60", "--date", "2025-08-01",
    ])
    .assert()
    .success();

    ht().args([
        "--db", &db_path, "expense", "add", "Pharmacy", "--category", "health", "--amount", "45",
        "--date", "2025-09-10",
    ])
    .assert()
    .success();

    ht().args(["--db", &db_path, "expense", "list", "--month", "2025-09"])
        .assert()
        .success()
        .stdout(contains("Pharmacy"))
        .stdout(contains("Bus pass").not());
}

#[test]
fn test_expense_invalid_category_rejected() {
    let db_path = setup_test_db("expense_badcat");
    init(&db_path);

    ht().args([
        "--db", &db_path, "expense", "add", "Mystery", "--category", "gadgets", "--amount", "10",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid expense category"));
}

#[test]
fn test_expense_rejects_non_positive_amount() {
    let db_path = setup_test_db("expense_badamount");
    init(&db_path);

    ht().args([
        "--db", &db_path, "expense", "add", "Refund", "--category", "other", "--amount", "0",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid amount"));
}

#[test]
fn test_expense_delete() {
    let db_path = setup_test_db("expense_del");
    init(&db_path);

    ht().args([
        "--db", &db_path, "expense", "add", "Cinema", "--category", "leisure", "--amount", "30",
    ])
    .assert()
    .success();

    ht().args(["--db", &db_path, "expense", "del", "1"])
        .assert()
        .success()
        .stdout(contains("Deleted expense 1"));

    ht().args(["--db", &db_path, "expense", "del", "1"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn test_expense_summary_empty_month_is_all_zero() {
    let db_path = setup_test_db("expense_summary_empty");
    init(&db_path);

    ht().args(["--db", &db_path, "expense", "summary"])
        .assert()
        .success()
        .stdout(contains("0.00 over 0 transactions"));
}

#[test]
fn test_expense_summary_counts_current_month() {
    let db_path = setup_test_db("expense_summary");
    init(&db_path);

    // dated today, so it always falls in the summary window
    ht().args([
        "--db", &db_path, "expense", "add", "Rent", "--category", "housing", "--amount", "1200",
    ])
    .assert()
    .success();

    ht().args(["--db", &db_path, "expense", "summary"])
        .assert()
        .success()
        .stdout(contains("1200.00 over 1 transactions"))
        .stdout(contains("Housing"));
}
