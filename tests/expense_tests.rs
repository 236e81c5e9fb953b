mod common;
use common::{dk, init_db_with_data, setup_test_db};
use predicates::prelude::*;

#[test]
fn test_summary_follows_every_expense_mutation() {
    let db_path = setup_test_db("expense_summary_reactor");

    dk().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    dk().args([
        "--db",
        &db_path,
        "summary",
        "set-base",
        "--balance",
        "1000",
        "--credit-limit",
        "300",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("1000.00"));

    // debit lowers the balance, credit eats into the credit line
    dk().args([
        "--db", &db_path, "expense", "add", "rent", "600", "--date", "2025-09-01", "--recurring",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("400.00"));

    dk().args([
        "--db", &db_path, "expense", "add", "shoes", "100", "--date", "2025-09-02", "--pay", "c",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("200.00"));

    dk().args(["--db", &db_path, "summary", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("400.00"))
        .stdout(predicate::str::contains("200.00"))
        .stdout(predicate::str::contains("600.00"));
}

#[test]
fn test_expense_list_range_filter() {
    let db_path = setup_test_db("expense_list_range");
    init_db_with_data(&db_path);

    dk().args(["--db", &db_path, "expense", "list", "--range", "2025-09"])
        .assert()
        .success()
        .stdout(predicate::str::contains("groceries"))
        .stdout(predicate::str::contains("cinema"));

    dk().args(["--db", &db_path, "expense", "list", "--range", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses to show"));
}

#[test]
fn test_recurring_expense_is_not_expanded() {
    let db_path = setup_test_db("expense_recurring_flag");

    dk().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    dk().args([
        "--db", &db_path, "expense", "add", "netflix", "12", "--date", "2025-09-01",
        "--recurring",
    ])
    .assert()
    .success();

    let list = dk()
        .args(["--db", &db_path, "expense", "list"])
        .output()
        .expect("list expenses");
    let stdout = String::from_utf8_lossy(&list.stdout);

    // exactly one row mentions it, unlike recurring agenda events
    assert_eq!(stdout.matches("netflix").count(), 1);
}

#[test]
fn test_negative_expense_is_rejected() {
    let db_path = setup_test_db("expense_negative");

    dk().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    dk().args([
        "--db", &db_path, "expense", "add", "oops", "--", "-5.0",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("cannot be negative"));
}

#[test]
fn test_editing_unknown_expense_fails() {
    let db_path = setup_test_db("expense_edit_unknown");

    dk().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    dk().args([
        "--db", &db_path, "expense", "edit", "31337", "--value", "9.99",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("No expense found with id 31337"));
}
