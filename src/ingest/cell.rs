use serde::{Deserialize, Serialize};
use std::fmt;

use crate::schema::MISSING_PLACEHOLDER;

/// A single spreadsheet cell
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Blank cell
    #[default]
    Empty,
    /// Numeric cell
    Number(f64),
    /// Text cell
    Text(String),
}

impl CellValue {
    /// Interpret exported text: blank is empty, numbers parse, anything else is text
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(number) if number.is_finite() => CellValue::Number(number),
            _ => CellValue::Text(trimmed.to_string()),
        }
    }

    /// Whether the cell carries a value: non-blank text or a non-zero number
    pub fn is_present(&self) -> bool {
        match self {
            CellValue::Empty => false,
            CellValue::Number(n) => *n != 0.0,
            CellValue::Text(s) => !s.trim().is_empty(),
        }
    }

    /// Whether the cell holds the "not measured" placeholder
    pub fn is_placeholder(&self) -> bool {
        matches!(self, CellValue::Text(s) if s.trim() == MISSING_PLACEHOLDER)
    }

    /// Whether the cell holds a measured quantity (present, not the placeholder)
    pub fn is_measured(&self) -> bool {
        self.is_present() && !self.is_placeholder()
    }

    /// Numeric value of a measured quantity; text that parses as a number counts
    pub fn as_quantity(&self) -> Option<f64> {
        if !self.is_measured() {
            return None;
        }
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => s.trim().parse().ok(),
            CellValue::Empty => None,
        }
    }

    /// Text content, if any
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Cell rendered as a string key (numbers as written, blanks as `None`)
    pub fn to_key(&self) -> Option<String> {
        match self {
            CellValue::Empty => None,
            CellValue::Number(n) => Some(n.to_string()),
            CellValue::Text(s) if s.trim().is_empty() => None,
            CellValue::Text(s) => Some(s.trim().to_string()),
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => f.write_str("None"),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => write!(f, "'{}'", s),
        }
    }
}
