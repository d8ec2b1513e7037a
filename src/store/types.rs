use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::type_system::MetaError;

/// Statistical classification of a column's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasureType {
    /// Numeric values on a continuous scale.
    #[default]
    Continuous,
    /// Integer-coded categories with a meaningful order.
    Ordinal,
    /// Integer-coded categories without an order.
    Nominal,
    /// Categories whose values are the labels themselves.
    NominalText,
}

impl MeasureType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasureType::Continuous => "continuous",
            MeasureType::Ordinal => "ordinal",
            MeasureType::Nominal => "nominal",
            MeasureType::NominalText => "nominal_text",
        }
    }
}

impl fmt::Display for MeasureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeasureType {
    type Err = MetaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "continuous" => Ok(MeasureType::Continuous),
            "ordinal" => Ok(MeasureType::Ordinal),
            "nominal" => Ok(MeasureType::Nominal),
            // The host UI spells it without the separator.
            "nominal_text" | "nominaltext" => Ok(MeasureType::NominalText),
            _ => Err(MetaError::UnknownMeasureType(s.to_string())),
        }
    }
}

/// How the evaluator feeds a function: one row at a time or whole columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvalMode {
    #[default]
    Unspecified,
    RowWise,
    ColumnWise,
}

impl EvalMode {
    pub fn is_row_wise(&self) -> bool {
        matches!(self, EvalMode::RowWise)
    }

    pub fn is_column_wise(&self) -> bool {
        matches!(self, EvalMode::ColumnWise)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EvalMode::Unspecified => "unspecified",
            EvalMode::RowWise => "row_wise",
            EvalMode::ColumnWise => "column_wise",
        }
    }
}

impl fmt::Display for EvalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvalMode {
    type Err = MetaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unspecified" | "" => Ok(EvalMode::Unspecified),
            "row_wise" | "row" => Ok(EvalMode::RowWise),
            "column_wise" | "column" => Ok(EvalMode::ColumnWise),
            _ => Err(MetaError::UnknownMode(s.to_string())),
        }
    }
}

/// Identity of a registered function, i.e. the name formulas call it by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FunctionId(pub String);

impl FunctionId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FunctionId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for FunctionId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

// Lets the registry be queried with a plain `&str`.
impl Borrow<str> for FunctionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A categorical level: the stored code and its display label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Level {
    pub value: i32,
    pub label: String,
}

impl Level {
    pub fn new(value: i32, label: impl Into<String>) -> Self {
        Self { value, label: label.into() }
    }
}

/// A resolved output level: (code, display text). Both are the label.
pub type LevelPair = (String, String);
