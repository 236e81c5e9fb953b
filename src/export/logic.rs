// src/export/logic.rs

use crate::db::kv;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{DebtExport, EventExport, ExpenseExport, SimulationExport};
use crate::export::range::parse_range;
use crate::export::{ExportData, ExportFormat};
use crate::models::{Category, Debt, Event, Expense, Marker, Simulation};
use crate::ui::messages::warning;

use chrono::NaiveDate;
use std::io;
use std::path::Path;

/// High level export driver.
pub struct ExportLogic;

impl ExportLogic {
    /// Export one record store to a file.
    ///
    /// - `data`: which store to read
    /// - `format`: "csv" | "json"
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or expressions like:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `YYYY:YYYY`
    ///   - `YYYY-MM:YYYY-MM`
    ///   - `YYYY-MM-DD:YYYY-MM-DD`
    pub fn export(
        pool: &DbPool,
        data: ExportData,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        match data {
            ExportData::Expenses => {
                let rows = load_expenses(pool, bounds)?;
                write_rows(&rows, format, path)
            }
            ExportData::Events => {
                let rows = load_events(pool, bounds)?;
                write_rows(&rows, format, path)
            }
            ExportData::Debts => {
                let rows = load_debts(pool, bounds)?;
                write_rows(&rows, format, path)
            }
            ExportData::Sims => {
                let rows = load_simulations(pool, bounds)?;
                write_rows(&rows, format, path)
            }
        }
    }
}

fn write_rows<T: serde::Serialize>(
    rows: &[T],
    format: ExportFormat,
    path: &Path,
) -> AppResult<()> {
    if rows.is_empty() {
        warning("No records found for selected range.");
        return Ok(());
    }

    match format {
        ExportFormat::Csv => export_csv(rows, path),
        ExportFormat::Json => export_json(rows, path),
    }
}

fn within(date: NaiveDate, bounds: Option<(NaiveDate, NaiveDate)>) -> bool {
    match bounds {
        None => true,
        Some((start, end)) => date >= start && date <= end,
    }
}

fn load_expenses(
    pool: &DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<ExpenseExport>> {
    let mut items: Vec<Expense> = kv::load(&pool.conn, kv::KEY_EXPENSES)?;
    items.retain(|e| within(e.date, bounds));
    items.sort_by_key(|e| (e.date, e.id));

    Ok(items.iter().map(ExpenseExport::from_record).collect())
}

/// Undated events cannot be placed in a range; they are exported only
/// when no range filter is active.
fn load_events(
    pool: &DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<EventExport>> {
    let mut items: Vec<Event> = kv::load(&pool.conn, kv::KEY_EVENTS)?;
    let markers: Vec<Marker> = kv::load(&pool.conn, kv::KEY_MARKERS)?;

    items.retain(|e| match e.date {
        Some(d) => within(d, bounds),
        None => bounds.is_none(),
    });
    items.sort_by_key(|e| (e.date, e.id));

    Ok(items
        .iter()
        .map(|e| EventExport::from_record(e, &markers))
        .collect())
}

fn load_debts(
    pool: &DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<DebtExport>> {
    let mut items: Vec<Debt> = kv::load(&pool.conn, kv::KEY_DEBTS)?;
    let categories: Vec<Category> = kv::load(&pool.conn, kv::KEY_CATEGORIES)?;

    items.retain(|d| within(d.due, bounds));
    items.sort_by_key(|d| (d.due, d.id));

    Ok(items
        .iter()
        .map(|d| DebtExport::from_record(d, &categories))
        .collect())
}

fn load_simulations(
    pool: &DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<SimulationExport>> {
    let mut items: Vec<Simulation> = kv::load(&pool.conn, kv::KEY_SIMULATIONS)?;
    items.retain(|s| within(s.date, bounds));
    items.sort_by_key(|s| (s.date, s.id));

    Ok(items.iter().map(SimulationExport::from_record).collect())
}
