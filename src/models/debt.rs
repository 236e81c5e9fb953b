use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Personal debt. Always references an existing category by id; the
/// category store refuses to delete a category that still has debts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    pub id: i64,
    pub name: String,
    pub value: f64,
    pub category_id: i64,
    pub due: NaiveDate,
    pub paid: bool,
    pub notes: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct DebtPatch {
    pub name: Option<String>,
    pub value: Option<f64>,
    pub category_id: Option<i64>,
    pub due: Option<NaiveDate>,
    pub notes: Option<String>,
}
