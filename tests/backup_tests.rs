mod common;
use common::{dk, init_db_with_data, setup_test_db, temp_out};
use predicates::prelude::*;

#[test]
fn test_backup_copies_the_database() {
    let db_path = setup_test_db("backup_plain");
    init_db_with_data(&db_path);

    let out = temp_out("backup_plain", "sqlite");

    dk().args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup created"));

    let src_len = std::fs::metadata(&db_path).expect("src metadata").len();
    let dst_len = std::fs::metadata(&out).expect("dst metadata").len();
    assert_eq!(src_len, dst_len);
}

#[test]
fn test_backup_compress_produces_zip() {
    let db_path = setup_test_db("backup_zip");
    init_db_with_data(&db_path);

    let out = temp_out("backup_zip", "sqlite");
    let zip = out.replace(".sqlite", ".zip");
    std::fs::remove_file(&zip).ok();

    dk().args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Compressed"));

    assert!(std::path::Path::new(&zip).exists());
    // the uncompressed copy is removed after zipping
    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_backup_missing_source_fails() {
    let db_path = setup_test_db("backup_missing_src");
    let out = temp_out("backup_missing_src", "sqlite");

    dk().args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Storage file not found"));
}
