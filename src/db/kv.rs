//! Snapshot storage: one JSON blob per record store under a fixed key.
//!
//! Every store mutation rewrites its whole blob (no deltas, no batching);
//! loads parse the blob back verbatim. A missing key is an empty store.

use crate::errors::{AppError, AppResult};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const KEY_EVENTS: &str = "events";
pub const KEY_MARKERS: &str = "markers";
pub const KEY_EXPENSES: &str = "expenses";
pub const KEY_DEBTS: &str = "debts";
pub const KEY_CATEGORIES: &str = "categories";
pub const KEY_SIMULATIONS: &str = "simulations";
pub const KEY_SUMMARY: &str = "summary";
pub const KEY_SUMMARY_BASE: &str = "summary_base";
pub const KEY_SESSION: &str = "session";

/// Load the snapshot stored under `key`, or `T::default()` when absent.
pub fn load<T>(conn: &Connection, key: &str) -> AppResult<T>
where
    T: DeserializeOwned + Default,
{
    let payload: Option<String> = conn
        .prepare_cached("SELECT payload FROM stores WHERE key = ?1")?
        .query_row([key], |row| row.get(0))
        .optional()?;

    match payload {
        None => Ok(T::default()),
        Some(raw) => serde_json::from_str(&raw).map_err(|e| AppError::Snapshot {
            key: key.to_string(),
            reason: e.to_string(),
        }),
    }
}

/// Replace the whole snapshot under `key` with the serialized `value`.
pub fn save<T: Serialize>(conn: &Connection, key: &str, value: &T) -> AppResult<()> {
    let payload = serde_json::to_string(value).map_err(|e| AppError::Snapshot {
        key: key.to_string(),
        reason: e.to_string(),
    })?;

    conn.prepare_cached(
        "INSERT INTO stores (key, payload, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET payload = ?2, updated_at = ?3",
    )?
    .execute(params![key, payload, Local::now().to_rfc3339()])?;

    Ok(())
}

/// Drop the snapshot under `key` entirely (used to force-clear a corrupt
/// or inconsistent session).
pub fn clear(conn: &Connection, key: &str) -> AppResult<()> {
    conn.execute("DELETE FROM stores WHERE key = ?1", [key])?;
    Ok(())
}

/// (key, payload byte length, updated_at) for every stored snapshot.
pub fn snapshot_info(conn: &Connection) -> AppResult<Vec<(String, usize, String)>> {
    let mut stmt =
        conn.prepare("SELECT key, length(payload), updated_at FROM stores ORDER BY key ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, i64>(1)? as usize,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
