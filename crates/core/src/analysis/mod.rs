//! The analysis entry point: transactions in, classified schedules out.
//!
//! # Data flow
//!
//! ```text
//! raw statements (T1, T2)
//!     -> parse_transaction          (validation, before anything else)
//!     -> Interleavings              (every order-preserving merge)
//!     -> ConflictGraph::build       (per schedule)
//!     -> classify                   (per schedule)
//!     -> equivalence::group         (over all results)
//!     -> Analysis
//! ```

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;
use core::hash::Hash;

use crate::graph::conflict::ConflictGraph;
use crate::operation::parse_transaction;
use crate::operation::types::{Operation, TransactionId};
use crate::schedule::{interleaving_count, Interleavings, Schedule};
use crate::serializability::{classify, equivalence, ClassificationResult};

pub mod error;

use self::error::Error;

/// One schedule together with everything derived from it.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedSchedule<Object> {
    pub schedule: Schedule<Object>,
    pub graph: ConflictGraph<Object>,
    pub result: ClassificationResult,
    /// Indices of the other schedules equivalent to this one. Always empty
    /// for unserializable schedules.
    pub equivalents: BTreeSet<usize>,
}

/// All schedules of one transaction pair, ordered by schedule index.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis<Object> {
    pub schedules: Vec<AnalyzedSchedule<Object>>,
}

impl<Object> Analysis<Object> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&AnalyzedSchedule<Object>> {
        self.schedules.get(index)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, AnalyzedSchedule<Object>> {
        self.schedules.iter()
    }

    #[must_use]
    pub fn results(&self) -> Vec<ClassificationResult> {
        self.iter().map(|analyzed| analyzed.result).collect()
    }

    #[must_use]
    pub fn serializable_count(&self) -> usize {
        self.iter()
            .filter(|analyzed| analyzed.result.is_serializable())
            .count()
    }

    /// `true` if every interleaving is serializable.
    #[must_use]
    pub fn all_serializable(&self) -> bool {
        self.serializable_count() == self.len()
    }
}

impl<'a, Object> IntoIterator for &'a Analysis<Object> {
    type Item = &'a AnalyzedSchedule<Object>;
    type IntoIter = core::slice::Iter<'a, AnalyzedSchedule<Object>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Analyze every interleaving of two transactions given as raw statements,
/// e.g. `["read_item(X)", "X:= X-N", "write_item(X)"]`.
///
/// Both transactions are validated before any schedule is generated, so a
/// bad input never yields a partial result.
///
/// # Errors
///
/// Returns [`Error::MalformedToken`] if a statement names a read or write
/// without an object, and [`Error::EmptyTransaction`] if a transaction has
/// no read or write at all.
pub fn analyze<S>(transaction1: &[S], transaction2: &[S]) -> Result<Analysis<String>, Error>
where
    S: AsRef<str>,
{
    let first = parse_transaction(TransactionId::T1, transaction1)?;
    let second = parse_transaction(TransactionId::T2, transaction2)?;
    Ok(analyze_operations(&first, &second))
}

/// Analyze every interleaving of two already-parsed transactions.
///
/// `first` must hold the operations of [`TransactionId::T1`] and `second`
/// those of [`TransactionId::T2`], each in program order.
#[must_use]
pub fn analyze_operations<Object>(
    first: &[Operation<Object>],
    second: &[Operation<Object>],
) -> Analysis<Object>
where
    Object: Eq + Hash + Clone,
{
    debug_assert!(first.iter().all(|op| op.transaction == TransactionId::T1));
    debug_assert!(second.iter().all(|op| op.transaction == TransactionId::T2));

    tracing::debug!(
        t1 = first.len(),
        t2 = second.len(),
        expected = ?interleaving_count(first.len(), second.len()),
        "enumerating interleavings"
    );

    let classified: Vec<(Schedule<Object>, ConflictGraph<Object>, ClassificationResult)> =
        Interleavings::new(first, second)
            .enumerate()
            .map(|(index, operations)| {
                let schedule = Schedule::new(index, operations);
                let graph = ConflictGraph::build(&schedule);
                let result = classify(index, &graph);
                tracing::trace!(
                    index,
                    state = ?graph.state(),
                    order = ?result.equivalent_order,
                    "classified schedule"
                );
                (schedule, graph, result)
            })
            .collect();

    let results: Vec<ClassificationResult> =
        classified.iter().map(|(_, _, result)| *result).collect();
    let mut groups = equivalence::group(&results);

    let analysis = Analysis {
        schedules: classified
            .into_iter()
            .map(|(schedule, graph, result)| AnalyzedSchedule {
                equivalents: groups.remove(&result.schedule_index).unwrap_or_default(),
                schedule,
                graph,
                result,
            })
            .collect(),
    };

    tracing::debug!(
        schedules = analysis.len(),
        serializable = analysis.serializable_count(),
        "analysis complete"
    );

    analysis
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serializability::EquivalentOrder;

    #[test]
    fn test_read_write_pair() {
        let analysis = analyze(&["read_item(X)"], &["write_item(X)"]).expect("valid input");
        assert_eq!(analysis.len(), 2);
        assert_eq!(
            analysis.schedules[0].result.equivalent_order,
            EquivalentOrder::T1ThenT2
        );
        assert_eq!(
            analysis.schedules[1].result.equivalent_order,
            EquivalentOrder::T2ThenT1
        );
        assert!(analysis.iter().all(|s| s.equivalents.is_empty()));
        assert!(analysis.all_serializable());
    }

    #[test]
    fn test_validation_happens_first() {
        let result = analyze(&["read_item(X)"], &["X:= 1"]);
        assert_eq!(result, Err(Error::EmptyTransaction(TransactionId::T2)));

        let result = analyze(&["read_item"], &["write_item(X)"]);
        assert!(matches!(result, Err(Error::MalformedToken(_))));
    }

    #[test]
    fn test_indices_follow_generation_order() {
        let analysis = analyze(
            &["read_item(X)", "write_item(X)"],
            &["read_item(X)", "write_item(X)"],
        )
        .unwrap();
        for (position, analyzed) in analysis.iter().enumerate() {
            assert_eq!(analyzed.schedule.index, position);
            assert_eq!(analyzed.result.schedule_index, position);
        }
        assert_eq!(analysis.results().len(), 6);
    }

    #[test]
    fn test_empty_operands() {
        let none: [Operation<&str>; 0] = [];
        assert!(analyze_operations(&none, &none).is_empty());

        let single = [Operation::write(TransactionId::T1, "X")];
        let analysis = analyze_operations(&single, &none);
        assert_eq!(analysis.len(), 1);
        assert_eq!(
            analysis.schedules[0].result.equivalent_order,
            EquivalentOrder::Either
        );
    }
}
