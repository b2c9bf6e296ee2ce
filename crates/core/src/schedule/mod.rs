//! Schedules: merged orderings of the two transactions' operations.

use alloc::vec::Vec;

use crate::operation::types::{Operation, TransactionId};

pub mod interleave;

pub use interleave::{combine_ordered, interleaving_count, Interleavings};

/// One interleaving of the two transactions.
///
/// `index` is assigned in generation order and is stable for a given input
/// pair. Positions are not stored on the operations: the position of an
/// operation is its 1-based offset in `operations`, see [`Schedule::steps`].
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule<Object> {
    pub index: usize,
    pub operations: Vec<Operation<Object>>,
}

/// An operation together with its 1-based position in a schedule.
#[derive(Debug)]
pub struct Step<'a, Object> {
    pub position: usize,
    pub operation: &'a Operation<Object>,
}

impl<Object> Schedule<Object> {
    #[must_use]
    pub const fn new(index: usize, operations: Vec<Operation<Object>>) -> Self {
        Self { index, operations }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Operations in position order, numbered from 1.
    pub fn steps(&self) -> impl Iterator<Item = Step<'_, Object>> {
        self.operations
            .iter()
            .enumerate()
            .map(|(offset, operation)| Step {
                position: offset + 1,
                operation,
            })
    }

    /// The subsequence of operations owned by `transaction`.
    pub fn project(&self, transaction: TransactionId) -> impl Iterator<Item = &Operation<Object>> {
        self.operations
            .iter()
            .filter(move |operation| operation.transaction == transaction)
    }

    /// Which transaction owns the 1-based `position`.
    #[must_use]
    pub fn owner_at(&self, position: usize) -> Option<TransactionId> {
        position
            .checked_sub(1)
            .and_then(|offset| self.operations.get(offset))
            .map(|operation| operation.transaction)
    }
}
