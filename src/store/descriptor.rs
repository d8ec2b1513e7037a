//! The per-function configuration record that drives inference.

use super::types::{EvalMode, FunctionId, LevelPair, MeasureType};
use crate::compute::{Argument, ValueSource};
use crate::type_system::rules::{levels, measure};
use crate::type_system::LevelUsage;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use tracing::debug;

/// Argument positions whose measure types feed the output type.
pub type ReturnIndices = SmallVec<[usize; 4]>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDescriptor {
    id: FunctionId,
    #[serde(default)]
    measure_type: MeasureType,
    #[serde(default)]
    returns: ReturnIndices,
    #[serde(default)]
    mode: EvalMode,
}

impl FunctionDescriptor {
    /// A descriptor with the defaults: `Continuous`, no returns, no mode.
    pub fn new(id: impl Into<FunctionId>) -> Self {
        Self {
            id: id.into(),
            measure_type: MeasureType::default(),
            returns: ReturnIndices::new(),
            mode: EvalMode::default(),
        }
    }

    pub fn id(&self) -> &FunctionId {
        &self.id
    }

    /// The declared measure type, used when arguments don't decide.
    pub fn measure_type(&self) -> MeasureType {
        self.measure_type
    }

    pub fn return_indices(&self) -> &[usize] {
        &self.returns
    }

    pub fn mode(&self) -> EvalMode {
        self.mode
    }

    /// Overwrites the declared type and the return indices.
    pub fn configure(&mut self, measure_type: MeasureType, returns: impl IntoIterator<Item = usize>) -> &mut Self {
        self.measure_type = measure_type;
        self.returns = returns.into_iter().collect();
        debug!(function = %self.id, measure_type = %self.measure_type, returns = ?self.returns.as_slice(), "configured function");
        self
    }

    pub fn set_row_wise(&mut self) -> &mut Self {
        self.set_mode(EvalMode::RowWise)
    }

    pub fn set_column_wise(&mut self) -> &mut Self {
        self.set_mode(EvalMode::ColumnWise)
    }

    pub fn set_mode(&mut self, mode: EvalMode) -> &mut Self {
        self.mode = mode;
        debug!(function = %self.id, mode = %mode, "set evaluation mode");
        self
    }

    /// Output measure type of a call with `args`.
    pub fn resolve_type<A: Argument>(&self, args: &[A]) -> MeasureType {
        measure::resolve(self, args)
    }

    /// Output levels of a call with `args` whose values are `output`.
    ///
    /// Empty unless the call resolves to `NominalText`. Otherwise, the labels of
    /// the levelled return arguments that occur in `output` at least once, in
    /// first-seen order.
    pub fn resolve_levels<A, S>(&self, args: &[A], output: &S) -> Vec<LevelPair>
    where
        A: Argument,
        S: ValueSource + ?Sized,
    {
        levels::resolve(self, args, output)
    }

    /// The raw counts behind `resolve_levels`; `None` when the type gate is closed.
    pub fn level_usage<A, S>(&self, args: &[A], output: &S) -> Option<LevelUsage>
    where
        A: Argument,
        S: ValueSource + ?Sized,
    {
        levels::usage(self, args, output)
    }
}

impl fmt::Display for FunctionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {{ row_wise: {}, column_wise: {}, measure_type: {}, returns: {:?} }}",
            self.id,
            self.mode.is_row_wise(),
            self.mode.is_column_wise(),
            self.measure_type,
            self.returns.as_slice()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::{CellValue, Column};

    #[test]
    fn test_defaults() {
        let d = FunctionDescriptor::new("MEAN");
        assert_eq!(d.measure_type(), MeasureType::Continuous);
        assert!(d.return_indices().is_empty());
        assert_eq!(d.mode(), EvalMode::Unspecified);
    }

    #[test]
    fn test_mode_switch_clears_previous_mode() {
        let mut d = FunctionDescriptor::new("Z");
        d.set_row_wise();
        d.set_column_wise();
        assert!(d.mode().is_column_wise());
        assert!(!d.mode().is_row_wise());

        d.set_row_wise();
        assert!(d.mode().is_row_wise());
        assert!(!d.mode().is_column_wise());
    }

    #[test]
    fn test_configure_overwrites() {
        let mut d = FunctionDescriptor::new("IF");
        d.configure(MeasureType::Ordinal, [0, 1]);
        d.configure(MeasureType::Nominal, [2]);
        assert_eq!(d.measure_type(), MeasureType::Nominal);
        assert_eq!(d.return_indices(), &[2]);
    }

    #[test]
    fn test_configure_keeps_mode() {
        let mut d = FunctionDescriptor::new("IF");
        d.set_row_wise().configure(MeasureType::Ordinal, [1]);
        assert!(d.mode().is_row_wise());
    }

    #[test]
    fn test_level_gate_uses_this_descriptor() {
        let mut d = FunctionDescriptor::new("IF");
        d.configure(MeasureType::Continuous, [1, 2]);

        let cond = Column::new("c", MeasureType::Continuous);
        let a = Column::new("a", MeasureType::NominalText).with_labels(["yes", "no"]);
        let b = Column::new("b", MeasureType::NominalText).with_labels(["no", "maybe"]);
        let output: Vec<CellValue> = vec!["no".into(), "maybe".into()];
        let args: [&dyn Argument; 3] = [&cond, &a, &b];

        assert_eq!(d.resolve_type(&args), MeasureType::NominalText);
        assert_eq!(
            d.resolve_levels(&args, &output),
            vec![("no".to_string(), "no".to_string()), ("maybe".to_string(), "maybe".to_string())]
        );
    }

    #[test]
    fn test_display_summary() {
        let mut d = FunctionDescriptor::new("VMEAN");
        d.set_column_wise();
        assert_eq!(
            d.to_string(),
            "VMEAN { row_wise: false, column_wise: true, measure_type: continuous, returns: [] }"
        );
    }
}
