use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Payment {
    Debit,
    Credit,
}

impl Payment {
    pub fn code(&self) -> &'static str {
        match self {
            Payment::Debit => "debit",
            Payment::Credit => "credit",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "debit" | "d" => Some(Payment::Debit),
            "credit" | "c" => Some(Payment::Credit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub name: String,
    pub value: f64,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub payment: Payment,
    /// Informational flag only: a recurring expense is never expanded into
    /// future instances, unlike agenda events.
    pub recurring: bool,
}

#[derive(Debug, Default, Clone)]
pub struct ExpensePatch {
    pub name: Option<String>,
    pub value: Option<f64>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub payment: Option<Payment>,
    pub recurring: Option<bool>,
}
