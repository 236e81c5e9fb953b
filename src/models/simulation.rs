use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Derived shift economics. Computed once when the simulation is created
/// and stored frozen; editing the inputs later does NOT recompute them.
/// `per_hour`/`per_km` are None when the denominator was zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShiftEconomics {
    pub fuel_cost: f64,
    pub net: f64,
    pub per_hour: Option<f64>,
    pub per_km: Option<f64>,
}

/// Work-shift simulation: one day of app-based driving work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulation {
    pub id: i64,
    pub date: NaiveDate,
    /// Hours worked.
    pub hours: f64,
    /// Distance traveled, km.
    pub distance: f64,
    /// Fuel price per liter.
    pub fuel_price: f64,
    /// Gross earnings for the shift.
    pub gross: f64,
    /// Fuel consumption, km per liter.
    pub consumption: f64,
    pub economics: ShiftEconomics,
}
