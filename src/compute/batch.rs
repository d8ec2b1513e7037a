//! Resolves many computed columns at once, e.g. after a data edit invalidates
//! every formula column downstream of the changed input.

use super::argument::Argument;
use super::value::ValueSource;
use crate::store::{FunctionDescriptor, FunctionId, LevelPair, MeasureType};
use rayon::prelude::*;
use tracing::debug;

/// A call awaiting inference: its function, its arguments and its output.
pub struct ComputedColumn<'a> {
    pub descriptor: &'a FunctionDescriptor,
    pub args: Vec<&'a (dyn Argument + Sync)>,
    pub output: &'a (dyn ValueSource + Sync),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumn {
    pub function: FunctionId,
    pub measure_type: MeasureType,
    pub levels: Vec<LevelPair>,
}

impl<'a> ComputedColumn<'a> {
    pub fn new(
        descriptor: &'a FunctionDescriptor,
        args: Vec<&'a (dyn Argument + Sync)>,
        output: &'a (dyn ValueSource + Sync),
    ) -> Self {
        Self { descriptor, args, output }
    }

    pub fn resolve(&self) -> ResolvedColumn {
        ResolvedColumn {
            function: self.descriptor.id().clone(),
            measure_type: self.descriptor.resolve_type(&self.args),
            levels: self.descriptor.resolve_levels(&self.args, self.output),
        }
    }
}

/// Resolves every column in parallel. Results keep the input order.
pub fn resolve_all(columns: &[ComputedColumn<'_>]) -> Vec<ResolvedColumn> {
    debug!(columns = columns.len(), "resolving computed columns");
    columns.par_iter().map(ComputedColumn::resolve).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::{CellValue, Column};
    use crate::store::FunctionRegistry;

    #[test]
    fn test_parallel_results_match_sequential() {
        let mut reg = FunctionRegistry::new();
        reg.row_wise("IF").configure(MeasureType::Continuous, [1, 2]);
        reg.row_wise("ROUND").configure(MeasureType::Continuous, [0]);

        let flag = Column::new("flag", MeasureType::Nominal).with_labels(["0", "1"]);
        let left = Column::new("left", MeasureType::NominalText).with_labels(["lo", "mid"]);
        let right = Column::new("right", MeasureType::NominalText).with_labels(["hi"]);
        let score = Column::new("score", MeasureType::Ordinal);

        let if_out: Vec<CellValue> = vec!["hi".into(), "lo".into(), "hi".into()];
        let round_out: Vec<CellValue> = vec![CellValue::Integer(3)];

        let if_args: Vec<&(dyn Argument + Sync)> = vec![&flag, &left, &right];
        let round_args: Vec<&(dyn Argument + Sync)> = vec![&score];
        let if_fn = reg.descriptor("IF").unwrap();
        let round_fn = reg.descriptor("ROUND").unwrap();

        let columns: Vec<ComputedColumn<'_>> = (0..16)
            .map(|i| {
                if i % 2 == 0 {
                    ComputedColumn::new(if_fn, if_args.clone(), &if_out)
                } else {
                    ComputedColumn::new(round_fn, round_args.clone(), &round_out)
                }
            })
            .collect();

        let parallel = resolve_all(&columns);
        let sequential: Vec<_> = columns.iter().map(ComputedColumn::resolve).collect();
        assert_eq!(parallel, sequential);

        assert_eq!(parallel[0].measure_type, MeasureType::NominalText);
        assert_eq!(
            parallel[0].levels,
            vec![("lo".to_string(), "lo".to_string()), ("hi".to_string(), "hi".to_string())]
        );
        assert_eq!(parallel[1].function, FunctionId::from("ROUND"));
        assert_eq!(parallel[1].measure_type, MeasureType::Ordinal);
        assert!(parallel[1].levels.is_empty());
    }
}
