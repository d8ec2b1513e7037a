//! An in-memory column: the simplest host-side argument and value source.

use super::argument::Argument;
use super::value::{CellValue, ValueSource};
use crate::store::{Level, MeasureType};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Column {
    pub name: String,
    pub measure_type: MeasureType,
    pub levels: Vec<Level>,
    pub values: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, measure_type: MeasureType) -> Self {
        Self {
            name: name.into(),
            measure_type,
            ..Default::default()
        }
    }

    /// Attaches levels from labels, coding them 0.. in the given order.
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.levels = labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| Level::new(i as i32, label))
            .collect();
        self
    }

    pub fn with_levels(mut self, levels: Vec<Level>) -> Self {
        self.levels = levels;
        self
    }

    pub fn with_values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        self.values = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn row_count(&self) -> usize {
        self.values.len()
    }
}

impl Argument for Column {
    fn measure_type(&self) -> MeasureType {
        self.measure_type
    }

    fn has_levels(&self) -> bool {
        !self.levels.is_empty()
    }

    fn levels(&self) -> &[Level] {
        &self.levels
    }
}

impl ValueSource for Column {
    fn values(&self) -> Box<dyn Iterator<Item = CellValue> + '_> {
        self.values.values()
    }
}
