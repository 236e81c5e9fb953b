mod common;
use common::{dk, setup_test_db};
use predicates::prelude::*;

#[test]
fn test_recurring_monthly_creates_seven_clamped_occurrences() {
    let db_path = setup_test_db("event_recurring_monthly");

    dk().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    dk().args([
        "--db",
        &db_path,
        "event",
        "add",
        "rent day",
        "--date",
        "2025-01-31",
        "--repeat",
        "monthly",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("6 future occurrences"));

    // the whole batch is persisted; Jan 31 clamps to the end of February
    dk().args(["--db", &db_path, "event", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-01-31"))
        .stdout(predicate::str::contains("2025-02-28"))
        .stdout(predicate::str::contains("2025-03-31"))
        .stdout(predicate::str::contains("2025-07-31"));
}

#[test]
fn test_done_toggles_and_pending_filter_follows() {
    let db_path = setup_test_db("event_done_toggle");

    dk().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    dk().args([
        "--db", &db_path, "event", "add", "call plumber", "--date", "2025-09-02",
    ])
    .assert()
    .success();

    let list = dk()
        .args(["--db", &db_path, "event", "list"])
        .output()
        .expect("list events");
    let stdout = String::from_utf8_lossy(&list.stdout);
    let id = stdout
        .lines()
        .find(|l| l.contains("call plumber"))
        .and_then(|l| l.split_whitespace().next().map(|s| s.to_string()))
        .expect("event id in listing");

    dk().args(["--db", &db_path, "event", "done", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("marked as done"));

    // the completed flag shows up in the listing
    dk().args(["--db", &db_path, "event", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✔"));

    dk().args(["--db", &db_path, "event", "list", "--pending"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No events to show"));

    // second toggle restores the record
    dk().args(["--db", &db_path, "event", "done", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("reopened"));
}

#[test]
fn test_marker_remove_detaches_events_instead_of_deleting_them() {
    let db_path = setup_test_db("event_marker_detach");

    dk().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    dk().args(["--db", &db_path, "marker", "add", "work", "--color", "blue"])
        .assert()
        .success();

    let list = dk()
        .args(["--db", &db_path, "marker", "list"])
        .output()
        .expect("list markers");
    let stdout = String::from_utf8_lossy(&list.stdout);
    let marker_id = stdout
        .lines()
        .find(|l| l.contains("work"))
        .and_then(|l| l.split_whitespace().next().map(|s| s.to_string()))
        .expect("marker id in listing");

    dk().args([
        "--db",
        &db_path,
        "event",
        "add",
        "standup",
        "--date",
        "2025-09-03",
        "--marker",
        &marker_id,
    ])
    .assert()
    .success();

    dk().args(["--db", &db_path, "marker", "rm", &marker_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 event(s) kept without a marker"));

    // the event survived, only the marker reference is gone
    dk().args(["--db", &db_path, "event", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("standup"));
}

#[test]
fn test_unknown_event_id_is_a_hard_error() {
    let db_path = setup_test_db("event_unknown_id");

    dk().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    dk().args(["--db", &db_path, "event", "rm", "424242"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("❌"))
        .stderr(predicate::str::contains("No event found with id 424242"));
}

#[test]
fn test_event_with_unknown_marker_is_rejected() {
    let db_path = setup_test_db("event_unknown_marker");

    dk().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    dk().args([
        "--db", &db_path, "event", "add", "x", "--marker", "999999",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("No marker found with id 999999"));
}
