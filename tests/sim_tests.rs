mod common;
use common::{dk, setup_test_db};
use predicates::prelude::*;

fn add_sim(db_path: &str, date: &str, gross: &str) {
    dk().args([
        "--db",
        db_path,
        "sim",
        "add",
        date,
        "--hours",
        "8",
        "--distance",
        "100",
        "--fuel-price",
        "6",
        "--gross",
        gross,
        "--consumption",
        "10",
    ])
    .assert()
    .success();
}

#[test]
fn test_sim_add_reports_frozen_economics() {
    let db_path = setup_test_db("sim_reference_shift");

    dk().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // 8h, 100km at 10 km/l and 6.0/l -> 60 fuel; 200 gross -> 140 net,
    // 17.50/h and 1.40/km
    add_sim(&db_path, "2025-06-01", "200");

    dk().args(["--db", &db_path, "sim", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("60.00"))
        .stdout(predicate::str::contains("140.00"))
        .stdout(predicate::str::contains("17.50"))
        .stdout(predicate::str::contains("1.40"));
}

#[test]
fn test_sim_zero_consumption_yields_undefined_rates_not_a_crash() {
    let db_path = setup_test_db("sim_zero_guards");

    dk().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    dk().args([
        "--db",
        &db_path,
        "sim",
        "add",
        "2025-06-02",
        "--hours",
        "0",
        "--distance",
        "0",
        "--fuel-price",
        "6",
        "--gross",
        "50",
        "--consumption",
        "0",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("--"));
}

#[test]
fn test_sim_stats_report_trend() {
    let db_path = setup_test_db("sim_stats_trend");

    dk().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // nets: 40, then five shifts around 90 -> clear upward trend
    add_sim(&db_path, "2025-06-01", "100");
    add_sim(&db_path, "2025-06-02", "150");
    add_sim(&db_path, "2025-06-03", "150");
    add_sim(&db_path, "2025-06-04", "150");
    add_sim(&db_path, "2025-06-05", "150");
    add_sim(&db_path, "2025-06-06", "150");

    dk().args(["--db", &db_path, "sim", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shifts:        6"))
        .stdout(predicate::str::contains("+125.0%"));
}

#[test]
fn test_sim_stats_with_one_shift_has_no_trend() {
    let db_path = setup_test_db("sim_stats_short");

    dk().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    add_sim(&db_path, "2025-06-01", "200");

    dk().args(["--db", &db_path, "sim", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not enough history"));
}

#[test]
fn test_sim_push_requires_a_session() {
    let db_path = setup_test_db("sim_push_no_session");

    dk().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    dk().args(["--db", &db_path, "sim", "push"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not signed in"));
}
