//! Rule for merging argument classifications into an output measure type.
//!
//! The merge is an ordered scan, not a ranking: `Ordinal` only promotes the
//! `Nominal` baseline, `Continuous` overrides whatever came before, and
//! `NominalText` absorbs and ends the scan.
use crate::compute::Argument;
use crate::store::{FunctionDescriptor, MeasureType};
use tracing::trace;

/// The state of the scan after one classification has been consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue(MeasureType),
    Halt(MeasureType),
}

/// Feeds one classification into the accumulator.
pub fn step(acc: MeasureType, next: MeasureType) -> Step {
    match (next, acc) {
        (MeasureType::NominalText, _) => Step::Halt(MeasureType::NominalText),
        (MeasureType::Continuous, _) => Step::Continue(MeasureType::Continuous),
        (MeasureType::Ordinal, MeasureType::Nominal) => Step::Continue(MeasureType::Ordinal),
        _ => Step::Continue(acc),
    }
}

/// Infers the output measure type of a call to `descriptor` with `args`.
pub(crate) fn resolve<A: Argument>(descriptor: &FunctionDescriptor, args: &[A]) -> MeasureType {
    let returns = descriptor.return_indices();
    if returns.is_empty() || args.is_empty() {
        return descriptor.measure_type();
    }

    let mut acc = MeasureType::Nominal;
    // Out-of-range slots are dropped here; classifications are read lazily.
    for arg in returns.iter().filter_map(|&i| args.get(i)) {
        match step(acc, arg.measure_type()) {
            Step::Continue(next) => acc = next,
            Step::Halt(last) => {
                acc = last;
                break;
            }
        }
    }

    trace!(function = %descriptor.id(), resolved = %acc, "resolved measure type");
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Level;
    use rstest::rstest;
    use std::cell::Cell;

    use crate::store::MeasureType::{Continuous as C, Nominal as N, NominalText as T, Ordinal as O};

    fn descriptor(declared: MeasureType, returns: &[usize]) -> FunctionDescriptor {
        let mut d = FunctionDescriptor::new("F");
        d.configure(declared, returns.iter().copied());
        d
    }

    /// Counts how often inference reads its classification.
    struct Probe {
        mt: MeasureType,
        reads: Cell<usize>,
    }

    impl Probe {
        fn new(mt: MeasureType) -> Self {
            Self { mt, reads: Cell::new(0) }
        }
    }

    impl Argument for Probe {
        fn measure_type(&self) -> MeasureType {
            self.reads.set(self.reads.get() + 1);
            self.mt
        }
        fn has_levels(&self) -> bool {
            false
        }
        fn levels(&self) -> &[Level] {
            &[]
        }
    }

    #[rstest]
    #[case(&[O, C], C)]
    #[case(&[C, O], C)] // Ordinal cannot demote
    #[case(&[O, T], T)]
    #[case(&[T, C], T)]
    #[case(&[C, T], T)]
    #[case(&[N, O], O)]
    #[case(&[O, N], O)]
    #[case(&[N, N], N)]
    #[case(&[O, O], O)]
    fn test_scan_priority(#[case] args: &[MeasureType], #[case] expected: MeasureType) {
        let d = descriptor(C, &[0, 1]);
        assert_eq!(resolve(&d, args), expected);
    }

    #[rstest]
    #[case(C)]
    #[case(O)]
    #[case(N)]
    #[case(T)]
    fn test_no_returns_keeps_declared_type(#[case] declared: MeasureType) {
        let d = descriptor(declared, &[]);
        assert_eq!(resolve(&d, &[T, O]), declared);
        assert_eq!(resolve::<MeasureType>(&d, &[]), declared);
    }

    #[test]
    fn test_no_args_keeps_declared_type() {
        let d = descriptor(O, &[0, 1]);
        assert_eq!(resolve::<MeasureType>(&d, &[]), O);
    }

    #[test]
    fn test_out_of_range_index_leaves_nominal_baseline() {
        let d = descriptor(C, &[5]);
        assert_eq!(resolve(&d, &[C, T]), N);
    }

    #[test]
    fn test_out_of_range_slots_are_skipped_not_fatal() {
        let d = descriptor(C, &[7, 1, 9]);
        assert_eq!(resolve(&d, &[T, O]), O);
    }

    #[test]
    fn test_nominal_text_stops_the_scan() {
        let d = descriptor(C, &[0, 1]);
        let args = [Probe::new(T), Probe::new(C)];

        assert_eq!(resolve(&d, &args), T);
        assert_eq!(args[0].reads.get(), 1);
        assert_eq!(args[1].reads.get(), 0);
    }

    #[test]
    fn test_repeated_index_is_read_per_slot() {
        let d = descriptor(C, &[0, 0]);
        let args = [Probe::new(O)];
        assert_eq!(resolve(&d, &args), O);
        assert_eq!(args[0].reads.get(), 2);
    }

    #[test]
    fn test_step_is_not_commutative() {
        assert_eq!(step(C, O), Step::Continue(C));
        assert_eq!(step(O, C), Step::Continue(C));
        assert_eq!(step(N, O), Step::Continue(O));
        assert_eq!(step(C, T), Step::Halt(T));
    }
}
