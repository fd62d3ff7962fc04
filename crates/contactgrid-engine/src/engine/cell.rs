use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{ExtractError, Result};

/// A single cell as handed over by the host sheet.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
}

impl CellValue {
    pub fn new_text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    /// Borrow the cell as text. Empty cells read as `""`; numbers are not
    /// contact text and are rejected.
    pub fn as_text(&self) -> Result<&str> {
        match self {
            CellValue::Empty => Ok(""),
            CellValue::Text(s) => Ok(s),
            CellValue::Number(n) => Err(ExtractError::InvalidInput(format!(
                "expected text, found number {}",
                n
            ))),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::new_text(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{}", n),
        }
    }
}
