use serde::{Deserialize, Serialize};

/// Fixed palette shared by agenda markers and debt categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Orange,
    Teal,
    Pink,
}

impl ColorTag {
    pub fn code(&self) -> &'static str {
        match self {
            ColorTag::Red => "red",
            ColorTag::Green => "green",
            ColorTag::Blue => "blue",
            ColorTag::Yellow => "yellow",
            ColorTag::Purple => "purple",
            ColorTag::Orange => "orange",
            ColorTag::Teal => "teal",
            ColorTag::Pink => "pink",
        }
    }

    /// Convert input code from CLI (case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "red" => Some(ColorTag::Red),
            "green" => Some(ColorTag::Green),
            "blue" => Some(ColorTag::Blue),
            "yellow" => Some(ColorTag::Yellow),
            "purple" => Some(ColorTag::Purple),
            "orange" => Some(ColorTag::Orange),
            "teal" => Some(ColorTag::Teal),
            "pink" => Some(ColorTag::Pink),
            _ => None,
        }
    }

    /// ANSI escape used when listing tagged records.
    pub fn ansi(&self) -> &'static str {
        match self {
            ColorTag::Red => "\x1b[31m",
            ColorTag::Green => "\x1b[32m",
            ColorTag::Blue => "\x1b[34m",
            ColorTag::Yellow => "\x1b[33m",
            ColorTag::Purple => "\x1b[35m",
            ColorTag::Orange => "\x1b[38;5;208m",
            ColorTag::Teal => "\x1b[36m",
            ColorTag::Pink => "\x1b[38;5;205m",
        }
    }
}

/// Agenda marker. Owned by the event store; events point at it by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Marker {
    pub id: i64,
    pub name: String,
    pub color: ColorTag,
}
