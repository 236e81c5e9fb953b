mod common;
use common::{dk, init_db_with_data, setup_test_db};
use daykeeper::db::kv;
use daykeeper::models::Session;
use predicates::prelude::*;

#[test]
fn test_init_creates_a_ready_database() {
    let db_path = setup_test_db("init_ready");

    dk().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("initialization completed"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_db_info_lists_snapshot_stores() {
    let db_path = setup_test_db("db_info_stores");
    init_db_with_data(&db_path);

    dk().args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("expenses"))
        .stdout(predicate::str::contains("Log lines"));
}

#[test]
fn test_log_print_traces_mutations() {
    let db_path = setup_test_db("log_trace");
    init_db_with_data(&db_path);

    dk().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("expense"));
}

#[test]
fn test_whoami_without_session() {
    let db_path = setup_test_db("whoami_anon");

    dk().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    dk().args(["--db", &db_path, "account", "whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not signed in"));
}

#[test]
fn test_db_check_repairs_broken_session_snapshot() {
    let db_path = setup_test_db("db_check_session");

    dk().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // plant the broken shape: logged-in flag without a profile
    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    kv::save(
        &conn,
        kv::KEY_SESSION,
        &Session {
            logged_in: true,
            token: None,
            profile: None,
        },
    )
    .expect("seed broken session");
    drop(conn);

    dk().args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Repaired inconsistent session"));

    // repaired for good: the second check is clean
    dk().args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Session snapshot is consistent"));
}

#[test]
fn test_config_print_and_migrate() {
    let db_path = setup_test_db("config_cmds");
    init_db_with_data(&db_path);

    dk().args(["--db", &db_path, "config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("database:"))
        .stdout(predicate::str::contains("currency:"));

    // migrations already ran on open, so this is a no-op that still reports
    dk().args(["--db", &db_path, "config", "--migrate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration migrations completed"));
}

#[test]
fn test_vacuum_and_migrate_run_cleanly() {
    let db_path = setup_test_db("db_maintenance");
    init_db_with_data(&db_path);

    dk().args(["--db", &db_path, "db", "--migrate", "--vacuum"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Migration completed"))
        .stdout(predicate::str::contains("Vacuum completed"));
}
