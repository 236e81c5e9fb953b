#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn dk() -> Command {
    cargo_bin_cmd!("daykeeper")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_daykeeper.sqlite", name));
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

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates tables, uses --test to leave the real config alone)
    dk().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    dk().args([
        "--db", db_path, "expense", "add", "groceries", "42.50", "--date", "2025-09-01",
    ])
    .assert()
    .success();

    dk().args([
        "--db", db_path, "expense", "add", "cinema", "15.00", "--date", "2025-09-15", "--pay",
        "credit",
    ])
    .assert()
    .success();

    dk().args([
        "--db",
        db_path,
        "event",
        "add",
        "dentist",
        "--date",
        "2025-09-10",
        "--time",
        "15:30",
    ])
    .assert()
    .success();
}
