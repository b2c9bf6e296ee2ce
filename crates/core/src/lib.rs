//! Conflict-serializability analysis for two transactions.
//!
//! Given two transactions, each an ordered list of `read_item(obj)` /
//! `write_item(obj)` operations, `schedcop_core` enumerates every legal
//! interleaving (schedule) of the two, decides for each one whether it is
//! conflict-serializable, and if so which serial order it is equivalent to:
//!
//! 1. **Interleaving** -- all `C(n + m, n)` order-preserving merges of the
//!    two operation lists ([`schedule::Interleavings`]).
//! 2. **Conflict graph** -- a two-node precedence graph with an edge
//!    `Ti -> Tj` when an operation of `Ti` conflicts with a later operation
//!    of `Tj` ([`graph::ConflictGraph`]).
//! 3. **Classification** -- a cycle means not serializable; a single edge
//!    fixes the serial order; no edge means both orders are equivalent
//!    ([`serializability::classify`]).
//! 4. **Equivalence** -- serializable schedules sharing a serial order are
//!    equivalent to each other ([`serializability::equivalence`]).
//!
//! The number of schedules grows exponentially; the tool is meant for
//! textbook-sized transactions.
//!
//! # Entry point
//!
//! ```rust,ignore
//! use schedcop_core::analyze;
//!
//! let analysis = analyze(
//!     &["read_item(X)", "X:= X-N", "write_item(X)"],
//!     &["read_item(X)", "X:= X+M", "write_item(X)"],
//! )?;
//! for analyzed in &analysis {
//!     println!("{}: {:?}", analyzed.schedule.index, analyzed.result.equivalent_order);
//! }
//! ```
//!
//! # Crate features
//!
//! - **`serde`** -- `Serialize`/`Deserialize` derives on all public types.
//! - **`schemars`** -- `JsonSchema` derives for the analysis report types.
//!
//! This crate is `no_std` compatible (requires `alloc`).

#![cfg_attr(not(any(test, feature = "schemars")), no_std)]
extern crate alloc;

pub mod analysis;
pub mod graph;
pub mod operation;
pub mod schedule;
pub mod serializability;

pub use analysis::error::Error;
pub use analysis::{analyze, analyze_operations, Analysis, AnalyzedSchedule};
pub use operation::types::{Access, Operation, TransactionId};
pub use serializability::{classify, ClassificationResult, EquivalentOrder, SerialOrder};
