//! Untyped table cells from dataset responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single cell of a dataset row.
///
/// Dataset rows mix dates (strings) and observations (numbers), so each cell
/// carries its own tag. All JSON numbers, integral or not, become
/// [`Cell::Number`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum Cell {
    /// A string value, typically a date.
    Text(String),
    /// A numeric observation.
    Number(f64),
    /// An explicit JSON `null`.
    Null,
    /// Anything else (booleans, nested arrays or objects).
    Other(Value),
}

impl Cell {
    /// Returns the text content if this is a text cell.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric content if this is a number cell.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the kind of this cell.
    #[must_use]
    pub const fn kind(&self) -> CellKind {
        match self {
            Self::Text(_) => CellKind::Text,
            Self::Number(_) => CellKind::Number,
            Self::Null => CellKind::Null,
            Self::Other(_) => CellKind::Other,
        }
    }
}

impl From<Value> for Cell {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Self::Text(s),
            // as_f64 only fails for arbitrary-precision numbers.
            Value::Number(n) => n.as_f64().map_or(Self::Other(Value::Number(n)), Self::Number),
            Value::Null => Self::Null,
            other => Self::Other(other),
        }
    }
}

impl From<Cell> for Value {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Text(s) => Self::String(s),
            Cell::Number(n) => serde_json::Number::from_f64(n).map_or(Self::Null, Self::Number),
            Cell::Null => Self::Null,
            Cell::Other(v) => v,
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// The tag of a [`Cell`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// String cell.
    Text,
    /// Numeric cell.
    Number,
    /// Null cell.
    Null,
    /// Any other JSON value.
    Other,
}

impl CellKind {
    /// Returns the kind as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Null => "null",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for CellKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cells_from_json() {
        let row: Vec<Cell> = serde_json::from_value(json!(["2013-01-04", 536.97, 21226200, null, true]))
            .unwrap();

        assert_eq!(row[0], Cell::Text("2013-01-04".to_string()));
        assert_eq!(row[1].as_number(), Some(536.97));
        assert_eq!(row[2].as_number(), Some(21_226_200.0));
        assert_eq!(row[3], Cell::Null);
        assert_eq!(row[4].kind(), CellKind::Other);
    }

    #[test]
    fn test_accessors_reject_other_kinds() {
        assert_eq!(Cell::Number(1.0).as_text(), None);
        assert_eq!(Cell::from("x").as_number(), None);
        assert_eq!(Cell::Null.as_number(), None);
    }

    #[test]
    fn test_cell_serializes_as_plain_json() {
        let row = vec![Cell::from("2012-06-30"), Cell::from(227_057.1), Cell::Null];
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value, json!(["2012-06-30", 227_057.1, null]));
    }
}
