use serde::{Deserialize, Serialize};

/// Singleton financial summary, recomputed from the expense collection on
/// every expense mutation. Never edited directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub balance: f64,
    pub credit_remaining: f64,
    pub open_bills: f64,
}

/// User-edited base snapshot the summary is derived from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseValues {
    pub balance: f64,
    pub credit_limit: f64,
}
