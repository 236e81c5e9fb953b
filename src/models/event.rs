use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Recurrence pattern for agenda events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    Daily,
    Weekly,
    Monthly,
}

impl Recurrence {
    pub fn code(&self) -> &'static str {
        match self {
            Recurrence::Daily => "daily",
            Recurrence::Weekly => "weekly",
            Recurrence::Monthly => "monthly",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "daily" => Some(Recurrence::Daily),
            "weekly" => Some(Recurrence::Weekly),
            "monthly" => Some(Recurrence::Monthly),
            _ => None,
        }
    }
}

/// Agenda event. A recurring template is expanded into sibling records at
/// creation time; afterwards every record is independent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub description: Option<String>,
    pub recurrence: Option<Recurrence>,
    pub completed: bool,
    pub marker_id: Option<i64>,
}

impl Event {
    pub fn date_str(&self) -> String {
        match self.date {
            Some(d) => d.format("%Y-%m-%d").to_string(),
            None => "--".to_string(),
        }
    }
}

/// Partial update for `EventStore::update`. `None` fields are left alone;
/// `clear_marker` drives an explicit Some→None transition for the marker.
#[derive(Debug, Default, Clone)]
pub struct EventPatch {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub description: Option<String>,
    pub marker_id: Option<i64>,
    pub clear_marker: bool,
}
