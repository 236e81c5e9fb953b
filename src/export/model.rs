// src/export/model.rs

use crate::models::{Category, Debt, Event, Expense, Marker, Simulation};
use crate::utils::time::format_optional_time;
use serde::Serialize;

/// Flat row for expense exports.
#[derive(Serialize, Clone, Debug)]
pub struct ExpenseExport {
    pub id: i64,
    pub name: String,
    pub value: f64,
    pub date: String,
    pub time: String,
    pub payment: String,
    pub recurring: bool,
}

impl ExpenseExport {
    pub(crate) fn from_record(e: &Expense) -> Self {
        Self {
            id: e.id,
            name: e.name.clone(),
            value: e.value,
            date: e.date.format("%Y-%m-%d").to_string(),
            time: format_optional_time(e.time),
            payment: e.payment.code().to_string(),
            recurring: e.recurring,
        }
    }
}

/// Flat row for agenda event exports. The marker id is resolved to the
/// marker name so the file stays readable without the markers store.
#[derive(Serialize, Clone, Debug)]
pub struct EventExport {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub time: String,
    pub description: String,
    pub recurrence: String,
    pub completed: bool,
    pub marker: String,
}

impl EventExport {
    pub(crate) fn from_record(e: &Event, markers: &[Marker]) -> Self {
        let marker = e
            .marker_id
            .and_then(|id| markers.iter().find(|m| m.id == id))
            .map(|m| m.name.clone())
            .unwrap_or_default();

        Self {
            id: e.id,
            title: e.title.clone(),
            date: e.date_str(),
            time: format_optional_time(e.time),
            description: e.description.clone().unwrap_or_default(),
            recurrence: e.recurrence.map(|r| r.code()).unwrap_or("").to_string(),
            completed: e.completed,
            marker,
        }
    }
}

/// Flat row for debt exports, with the category resolved by name.
#[derive(Serialize, Clone, Debug)]
pub struct DebtExport {
    pub id: i64,
    pub name: String,
    pub value: f64,
    pub category: String,
    pub due: String,
    pub paid: bool,
    pub notes: String,
}

impl DebtExport {
    pub(crate) fn from_record(d: &Debt, categories: &[Category]) -> Self {
        let category = categories
            .iter()
            .find(|c| c.id == d.category_id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| d.category_id.to_string());

        Self {
            id: d.id,
            name: d.name.clone(),
            value: d.value,
            category,
            due: d.due.format("%Y-%m-%d").to_string(),
            paid: d.paid,
            notes: d.notes.clone().unwrap_or_default(),
        }
    }
}

/// Flat row for work-shift simulation exports, inputs and frozen
/// economics side by side.
#[derive(Serialize, Clone, Debug)]
pub struct SimulationExport {
    pub id: i64,
    pub date: String,
    pub hours: f64,
    pub distance: f64,
    pub fuel_price: f64,
    pub gross: f64,
    pub consumption: f64,
    pub fuel_cost: f64,
    pub net: f64,
    pub per_hour: Option<f64>,
    pub per_km: Option<f64>,
}

impl SimulationExport {
    pub(crate) fn from_record(s: &Simulation) -> Self {
        Self {
            id: s.id,
            date: s.date.format("%Y-%m-%d").to_string(),
            hours: s.hours,
            distance: s.distance,
            fuel_price: s.fuel_price,
            gross: s.gross,
            consumption: s.consumption,
            fuel_cost: s.economics.fuel_cost,
            net: s.economics.net,
            per_hour: s.economics.per_hour,
            per_km: s.economics.per_km,
        }
    }
}
