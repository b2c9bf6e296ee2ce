pub mod conflict;

pub use conflict::{Conflict, ConflictGraph, ConflictKind, EdgeState};
