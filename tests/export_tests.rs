mod common;
use common::{dk, init_db_with_data, setup_test_db, temp_out};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_export_expenses_csv_all() {
    let db_path = setup_test_db("export_expenses_csv_all");
    init_db_with_data(&db_path);

    let out = temp_out("export_expenses_csv_all", "csv");

    dk().args([
        "--db", &db_path, "export", "--what", "expenses", "--format", "csv", "--file", &out,
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("groceries"));
    assert!(content.contains("2025-09-15"));
}

#[test]
fn test_export_events_json_range() {
    let db_path = setup_test_db("export_events_json_range");
    init_db_with_data(&db_path);

    let out = temp_out("export_events_json_range", "json");

    dk().args([
        "--db", &db_path, "export", "--what", "events", "--format", "json", "--file", &out,
        "--range", "2025-09",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("dentist"));
    assert!(content.contains("2025-09-10"));
}

#[test]
fn test_export_out_of_range_writes_nothing() {
    let db_path = setup_test_db("export_empty_range");
    init_db_with_data(&db_path);

    let out = temp_out("export_empty_range", "csv");

    dk().args([
        "--db", &db_path, "export", "--what", "expenses", "--format", "csv", "--file", &out,
        "--range", "2019",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("No records found"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let db_path = setup_test_db("export_force");
    init_db_with_data(&db_path);

    let out = temp_out("export_force", "json");
    fs::write(&out, "stale").expect("seed existing file");

    dk().args([
        "--db", &db_path, "export", "--what", "expenses", "--format", "json", "--file", &out,
        "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("groceries"));
}

#[test]
fn test_export_rejects_relative_paths() {
    let db_path = setup_test_db("export_relative");
    init_db_with_data(&db_path);

    dk().args([
        "--db", &db_path, "export", "--what", "expenses", "--file", "out.csv",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("must be absolute"));
}

#[test]
fn test_export_bad_range_is_rejected() {
    let db_path = setup_test_db("export_bad_range");
    init_db_with_data(&db_path);

    let out = temp_out("export_bad_range", "csv");

    dk().args([
        "--db", &db_path, "export", "--what", "expenses", "--file", &out, "--range",
        "yesterday",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("--range"));
}
