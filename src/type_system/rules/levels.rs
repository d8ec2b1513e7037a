//! Rule for restricting a computed column's levels to the labels it produces.
use crate::compute::{Argument, CellValue, ValueSource};
use crate::store::{FunctionDescriptor, LevelPair, MeasureType};
use indexmap::IndexMap;
use tracing::trace;

/// Occurrence counts for candidate labels, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelUsage {
    counts: IndexMap<String, usize>,
}

impl LevelUsage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a candidate label. Labels already present keep their position.
    pub fn add_candidate(&mut self, label: &str) {
        if !self.counts.contains_key(label) {
            self.counts.insert(label.to_string(), 0);
        }
    }

    /// Counts `value` if it is one of the candidates.
    pub fn record(&mut self, value: &CellValue) -> bool {
        match value.as_text().and_then(|text| self.counts.get_mut(text)) {
            Some(count) => {
                *count += 1;
                true
            }
            None => false,
        }
    }

    /// Consumes the whole stream once.
    pub fn tally<S: ValueSource + ?Sized>(&mut self, source: &S) {
        for value in source.values() {
            self.record(&value);
        }
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn count(&self, label: &str) -> Option<usize> {
        self.counts.get(label).copied()
    }

    pub fn counts(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts.iter().map(|(label, n)| (label.as_str(), *n))
    }

    /// Labels seen at least once, as (code, label) pairs.
    pub fn into_used_levels(self) -> Vec<LevelPair> {
        self.counts
            .into_iter()
            .filter(|(_, n)| *n > 0)
            .map(|(label, _)| (label.clone(), label))
            .collect()
    }
}

/// Collects candidate labels from the levelled arguments in return-index order.
fn candidates<A: Argument>(descriptor: &FunctionDescriptor, args: &[A]) -> LevelUsage {
    let mut usage = LevelUsage::new();
    for arg in descriptor.return_indices().iter().filter_map(|&i| args.get(i)) {
        if !arg.has_levels() {
            continue;
        }
        for level in arg.levels() {
            usage.add_candidate(&level.label);
        }
    }
    usage
}

/// Tallies candidate usage, or `None` when the output is not `NominalText`.
pub(crate) fn usage<A, S>(descriptor: &FunctionDescriptor, args: &[A], output: &S) -> Option<LevelUsage>
where
    A: Argument,
    S: ValueSource + ?Sized,
{
    if descriptor.return_indices().is_empty() || args.is_empty() {
        return None;
    }
    if descriptor.resolve_type(args) != MeasureType::NominalText {
        return None;
    }

    let mut usage = candidates(descriptor, args);
    // Nothing can match, so the stream is left untouched.
    if !usage.is_empty() {
        usage.tally(output);
    }
    trace!(function = %descriptor.id(), candidates = usage.len(), "tallied level usage");
    Some(usage)
}

pub(crate) fn resolve<A, S>(descriptor: &FunctionDescriptor, args: &[A], output: &S) -> Vec<LevelPair>
where
    A: Argument,
    S: ValueSource + ?Sized,
{
    usage(descriptor, args, output)
        .map(LevelUsage::into_used_levels)
        .unwrap_or_default()
}
