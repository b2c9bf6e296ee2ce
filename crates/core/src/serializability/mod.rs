//! Mapping a conflict graph to a serializability verdict.
//!
//! A schedule of two transactions is conflict-serializable exactly when its
//! precedence graph has no cycle, i.e. not both `T1 -> T2` and `T2 -> T1`.
//! The remaining edge tells which serial order the schedule is equivalent to.
//! A graph without edges means the transactions never conflict, so the
//! schedule is equivalent to both serial orders ([`EquivalentOrder::Either`]).

use core::fmt::{Display, Formatter, Result};

use crate::graph::conflict::{ConflictGraph, EdgeState};

pub mod equivalence;

/// A serial (non-interleaved) execution of the two transactions.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SerialOrder {
    T1ThenT2,
    T2ThenT1,
}

impl Display for SerialOrder {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Self::T1ThenT2 => write!(f, "T1 -> T2"),
            Self::T2ThenT1 => write!(f, "T2 -> T1"),
        }
    }
}

/// Which serial orders a schedule is conflict-equivalent to.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EquivalentOrder {
    /// Not serializable: the graph has a cycle.
    None,
    T1ThenT2,
    T2ThenT1,
    /// No conflicts at all; both serial orders are equivalent.
    Either,
}

impl EquivalentOrder {
    #[must_use]
    pub const fn is_serializable(self) -> bool {
        !matches!(self, Self::None)
    }

    #[must_use]
    pub const fn serial_orders(self) -> &'static [SerialOrder] {
        match self {
            Self::None => &[],
            Self::T1ThenT2 => &[SerialOrder::T1ThenT2],
            Self::T2ThenT1 => &[SerialOrder::T2ThenT1],
            Self::Either => &[SerialOrder::T1ThenT2, SerialOrder::T2ThenT1],
        }
    }
}

/// Verdict for one schedule.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ClassificationResult {
    pub schedule_index: usize,
    pub serializable: bool,
    pub equivalent_order: EquivalentOrder,
}

impl ClassificationResult {
    #[must_use]
    pub const fn new(schedule_index: usize, equivalent_order: EquivalentOrder) -> Self {
        Self {
            schedule_index,
            serializable: equivalent_order.is_serializable(),
            equivalent_order,
        }
    }

    #[must_use]
    pub const fn is_serializable(&self) -> bool {
        self.serializable
    }

    #[must_use]
    pub const fn serial_orders(&self) -> &'static [SerialOrder] {
        self.equivalent_order.serial_orders()
    }
}

/// Classifies the schedule numbered `schedule_index` from its graph alone.
#[must_use]
pub const fn classify<Object>(
    schedule_index: usize,
    graph: &ConflictGraph<Object>,
) -> ClassificationResult {
    let equivalent_order = match graph.state() {
        EdgeState::Both => EquivalentOrder::None,
        EdgeState::T1ToT2 => EquivalentOrder::T1ThenT2,
        EdgeState::T2ToT1 => EquivalentOrder::T2ThenT1,
        EdgeState::Empty => EquivalentOrder::Either,
    };
    ClassificationResult::new(schedule_index, equivalent_order)
}
