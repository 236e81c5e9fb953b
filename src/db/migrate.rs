use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Ensure the snapshot table exists. One row per record store.
fn ensure_stores_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS stores (
            key        TEXT PRIMARY KEY,
            payload    TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT ''
        );
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Early builds kept snapshots without a write timestamp; add the column
/// and backfill with an empty string.
fn migrate_add_updated_at(conn: &Connection) -> Result<()> {
    let version = "20250614_0001_stores_updated_at";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    let mut stmt = conn.prepare("PRAGMA table_info('stores')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    let mut has_col = false;
    for c in cols {
        if c? == "updated_at" {
            has_col = true;
            break;
        }
    }

    if !has_col {
        conn.execute(
            "ALTER TABLE stores ADD COLUMN updated_at TEXT NOT NULL DEFAULT '';",
            [],
        )?;
        success("Added 'updated_at' column to stores table.");
    }

    mark_applied(conn, version, "Added updated_at to stores")?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Called from db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table (migration bookkeeping lives there)
    ensure_log_table(conn)?;

    // 2) Ensure snapshot table
    ensure_stores_table(conn)?;

    // 3) Versioned schema fixes
    migrate_add_updated_at(conn)?;

    // 4) Config file fixes (bookkeeping shares the log table)
    crate::config::migrate::migrate_add_remote_url(conn)?;

    Ok(())
}
