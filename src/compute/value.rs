//! Cell values produced by functions, and the stream capability that yields them.

use serde::{Deserialize, Serialize};

/// A single cell produced by a function.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Missing,
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl CellValue {
    /// The text of a text cell. Only text cells can match a level label.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Integer(v)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Decimal(v)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(CellValue::Missing, Into::into)
    }
}

/// A finite, restartable stream of a function's output values.
///
/// Every call to `values` starts again from the first row.
pub trait ValueSource {
    fn values(&self) -> Box<dyn Iterator<Item = CellValue> + '_>;
}

impl<T: ValueSource + ?Sized> ValueSource for &T {
    fn values(&self) -> Box<dyn Iterator<Item = CellValue> + '_> {
        (**self).values()
    }
}

impl<T: ValueSource + ?Sized> ValueSource for Box<T> {
    fn values(&self) -> Box<dyn Iterator<Item = CellValue> + '_> {
        (**self).values()
    }
}

impl ValueSource for [CellValue] {
    fn values(&self) -> Box<dyn Iterator<Item = CellValue> + '_> {
        Box::new(self.iter().cloned())
    }
}

impl ValueSource for Vec<CellValue> {
    fn values(&self) -> Box<dyn Iterator<Item = CellValue> + '_> {
        self.as_slice().values()
    }
}
