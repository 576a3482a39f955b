//! Typed rows for the winners and shortlist tables

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Deserialize a raw cell that may arrive as text (CSV) or as a number
/// (records-oriented JSON from numeric dataframe columns).
fn de_raw_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct RawTextVisitor;

    impl serde::de::Visitor<'_> for RawTextVisitor {
        type Value = Option<String>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string, a number, or null")
        }

        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }
    }

    deserializer.deserialize_any(RawTextVisitor)
}

/// One row of the past-winners table (2015-2024 data drop).
///
/// Trophy and award cells hold the raw comma-separated text from the source
/// file; an empty cell or the em-dash placeholder means "none".
#[derive(Debug, Clone, Deserialize)]
pub struct WinnerRecord {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "Club", default)]
    pub club: Option<String>,
    #[serde(rename = "Major Club Trophies", default)]
    pub major_club_trophies: Option<String>,
    #[serde(rename = "Individual Awards", default)]
    pub individual_awards: Option<String>,
}

/// One row of the 2025 shortlist table.
///
/// `avg_rating` is kept as raw text: the source data contains non-numeric
/// placeholders, and rows that fail numeric coercion are dropped during
/// scoring rather than rejected at load time.
#[derive(Debug, Clone, Deserialize)]
pub struct ShortlistEntry {
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "Club")]
    pub club: String,
    #[serde(rename = "Avg. Rating", default, deserialize_with = "de_raw_text")]
    pub avg_rating: Option<String>,
    #[serde(rename = "Major Trophies (2024–25)", default)]
    pub major_trophies: Option<String>,
    #[serde(rename = "Individual Awards (2024–25)", default)]
    pub individual_awards: Option<String>,
}

/// A dynamically-typed table cell for the raw browsing API.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Integer(i64),
    Float(f64),
    String(String),
}

// -- Manual Eq/Ord so rows can be sorted on any column --

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use CellValue::*;
        fn discriminant(v: &CellValue) -> u8 {
            match v {
                Null => 0,
                Integer(_) => 1,
                Float(_) => 2,
                String(_) => 3,
            }
        }
        // Numeric cells compare by value regardless of integer/float storage
        if let (Some(a), Some(b)) = (self.as_f64(), other.as_f64()) {
            return a.total_cmp(&b);
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            return da.cmp(&db);
        }
        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (String(a), String(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => write!(f, ""),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::String(s) => write!(f, "{s}"),
        }
    }
}

impl CellValue {
    /// Interpret the cell as a number, if it holds one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Classify a raw text cell: empty becomes null, numeric text becomes a
    /// number, everything else stays a string.
    pub fn from_raw(s: Option<&str>) -> CellValue {
        let Some(s) = s else {
            return CellValue::Null;
        };
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return CellValue::Null;
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(v) = trimmed.parse::<f64>() {
            return CellValue::Float(v);
        }
        CellValue::String(s.to_string())
    }
}

/// A raw table projected into columns and dynamically-typed rows,
/// as served by the table-browsing API.
#[derive(Debug, Clone)]
pub struct TableView {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl WinnerRecord {
    pub fn table_columns() -> Vec<String> {
        ["Year", "Player", "Club", "Major Club Trophies", "Individual Awards"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    pub fn table_row(&self) -> Vec<CellValue> {
        vec![
            CellValue::Integer(self.year as i64),
            CellValue::String(self.player.clone()),
            CellValue::from_raw(self.club.as_deref()),
            CellValue::from_raw(self.major_club_trophies.as_deref()),
            CellValue::from_raw(self.individual_awards.as_deref()),
        ]
    }
}

impl ShortlistEntry {
    pub fn table_columns() -> Vec<String> {
        [
            "Player",
            "Club",
            "Avg. Rating",
            "Major Trophies (2024–25)",
            "Individual Awards (2024–25)",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    pub fn table_row(&self) -> Vec<CellValue> {
        vec![
            CellValue::String(self.player.clone()),
            CellValue::String(self.club.clone()),
            CellValue::from_raw(self.avg_rating.as_deref()),
            CellValue::from_raw(self.major_trophies.as_deref()),
            CellValue::from_raw(self.individual_awards.as_deref()),
        ]
    }
}
