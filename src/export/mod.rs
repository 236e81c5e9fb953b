// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
pub(crate) mod range;

pub use logic::ExportLogic;
pub use model::{DebtExport, EventExport, ExpenseExport, SimulationExport};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export backend.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Which record store an export run reads from.
#[derive(Clone, Debug, ValueEnum)]
pub enum ExportData {
    Expenses,
    Events,
    Debts,
    Sims,
}
