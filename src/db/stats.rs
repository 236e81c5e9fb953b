use crate::db::kv;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) SNAPSHOTS
    //
    let snapshots = kv::snapshot_info(&pool.conn)?;

    if snapshots.is_empty() {
        println!("{}• Stores:{} {}none{}", CYAN, RESET, GREY, RESET);
    } else {
        println!("{}• Stores:{}", CYAN, RESET);
        for (key, bytes, updated_at) in &snapshots {
            // Snapshots are JSON arrays (or one object for singletons);
            // count records without deserializing into typed models.
            let records = record_count(&pool.conn, key);
            println!(
                "    {key:<14} {}{records:>4}{} records  {bytes:>7} B  {}{}{}",
                GREEN, RESET, GREY, updated_at, RESET
            );
        }
    }

    //
    // 3) AUDIT LOG
    //
    let log_rows: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Log lines:{} {}{}{}", CYAN, RESET, GREEN, log_rows, RESET);

    println!();
    Ok(())
}

fn record_count(conn: &rusqlite::Connection, key: &str) -> usize {
    let payload: String = conn
        .query_row("SELECT payload FROM stores WHERE key = ?1", [key], |row| {
            row.get(0)
        })
        .unwrap_or_default();

    match serde_json::from_str::<serde_json::Value>(&payload) {
        Ok(serde_json::Value::Array(items)) => items.len(),
        Ok(_) => 1,
        Err(_) => 0,
    }
}
