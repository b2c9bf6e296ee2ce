use core::hash::Hash;

use hashbrown::HashMap;

use crate::operation::types::{Access, TransactionId};
use crate::schedule::{Schedule, Step};

/// How two conflicting operations relate, named in chronological order.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ConflictKind {
    /// Earlier write, later read.
    WriteRead,
    /// Earlier read, later write.
    ReadWrite,
    /// Earlier write, later write.
    WriteWrite,
}

impl ConflictKind {
    #[must_use]
    pub const fn between(earlier: Access, later: Access) -> Option<Self> {
        match (earlier, later) {
            (Access::Write, Access::Read) => Some(Self::WriteRead),
            (Access::Read, Access::Write) => Some(Self::ReadWrite),
            (Access::Write, Access::Write) => Some(Self::WriteWrite),
            (Access::Read, Access::Read) => None,
        }
    }
}

/// The pair of operations that justifies an edge: the source transaction's
/// operation at `earlier` conflicts with the target's operation at `later`.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict<Object> {
    pub kind: ConflictKind,
    pub object: Object,
    pub earlier: usize,
    pub later: usize,
}

/// The four edge configurations a two-node conflict graph can be in.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EdgeState {
    Empty,
    T1ToT2,
    T2ToT1,
    Both,
}

/// Precedence graph over the nodes `T1` and `T2`.
///
/// Each node has at most one outgoing edge, to the other node. A present
/// edge keeps the first conflict (in schedule order) that produced it;
/// later conflicts in the same direction do not change the graph.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictGraph<Object> {
    pub t1_to_t2: Option<Conflict<Object>>,
    pub t2_to_t1: Option<Conflict<Object>>,
}

impl<Object> Default for ConflictGraph<Object> {
    fn default() -> Self {
        Self {
            t1_to_t2: None,
            t2_to_t1: None,
        }
    }
}

impl<Object> ConflictGraph<Object> {
    /// The outgoing edge of `from`, if any.
    #[must_use]
    pub const fn edge(&self, from: TransactionId) -> Option<&Conflict<Object>> {
        match from {
            TransactionId::T1 => self.t1_to_t2.as_ref(),
            TransactionId::T2 => self.t2_to_t1.as_ref(),
        }
    }

    #[must_use]
    pub const fn has_edge(&self, from: TransactionId, to: TransactionId) -> bool {
        match (from, to) {
            (TransactionId::T1, TransactionId::T2) | (TransactionId::T2, TransactionId::T1) => {
                self.edge(from).is_some()
            }
            _ => false,
        }
    }

    #[must_use]
    pub const fn state(&self) -> EdgeState {
        match (self.t1_to_t2.is_some(), self.t2_to_t1.is_some()) {
            (false, false) => EdgeState::Empty,
            (true, false) => EdgeState::T1ToT2,
            (false, true) => EdgeState::T2ToT1,
            (true, true) => EdgeState::Both,
        }
    }

    #[must_use]
    pub const fn edge_count(&self) -> usize {
        match self.state() {
            EdgeState::Empty => 0,
            EdgeState::T1ToT2 | EdgeState::T2ToT1 => 1,
            EdgeState::Both => 2,
        }
    }

    /// With two nodes the only possible cycle is `T1 -> T2 -> T1`.
    #[must_use]
    pub const fn has_cycle(&self) -> bool {
        matches!(self.state(), EdgeState::Both)
    }
}

impl<Object> ConflictGraph<Object>
where
    Object: Eq + Hash + Clone,
{
    /// Builds the precedence graph of `schedule`.
    ///
    /// For each transaction `t` the schedule is scanned once in position
    /// order, remembering what `t` has read and written so far. The edge
    /// `t -> t'` is added at the first operation of `t'` that conflicts with
    /// one of them.
    #[must_use]
    pub fn build(schedule: &Schedule<Object>) -> Self {
        Self {
            t1_to_t2: first_conflict(schedule, TransactionId::T1),
            t2_to_t1: first_conflict(schedule, TransactionId::T2),
        }
    }
}

fn first_conflict<Object>(
    schedule: &Schedule<Object>,
    source: TransactionId,
) -> Option<Conflict<Object>>
where
    Object: Eq + Hash + Clone,
{
    // object -> position of the first access by `source`
    let mut written: HashMap<&Object, usize> = HashMap::new();
    let mut read: HashMap<&Object, usize> = HashMap::new();

    for step in schedule.steps() {
        let operation = step.operation;
        if operation.transaction == source {
            let seen = match operation.access {
                Access::Read => &mut read,
                Access::Write => &mut written,
            };
            seen.entry(&operation.object).or_insert(step.position);
        } else if let Some(conflict) = conflict_at(&written, &read, &step) {
            return Some(conflict);
        }
    }

    None
}

/// Checks the other transaction's operation at `step` against the earlier
/// accesses of the source transaction. Picks the earliest such access.
fn conflict_at<Object>(
    written: &HashMap<&Object, usize>,
    read: &HashMap<&Object, usize>,
    step: &Step<'_, Object>,
) -> Option<Conflict<Object>>
where
    Object: Eq + Hash + Clone,
{
    let object = &step.operation.object;
    let later = step.operation.access;

    let after_write = written.get(object).map(|&position| (position, Access::Write));
    let after_read = read.get(object).map(|&position| (position, Access::Read));

    [after_write, after_read]
        .into_iter()
        .flatten()
        .filter_map(|(earlier, access)| {
            ConflictKind::between(access, later).map(|kind| Conflict {
                kind,
                object: object.clone(),
                earlier,
                later: step.position,
            })
        })
        .min_by_key(|conflict| conflict.earlier)
}
