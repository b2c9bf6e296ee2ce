use core::fmt::{Debug, Display, Formatter, Result};

/// Identifies one of the two transactions under analysis.
///
/// Ordering is `T1 < T2`, which fixes the generation order of interleavings.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TransactionId {
    T1,
    T2,
}

impl TransactionId {
    /// Both transactions, in order.
    pub const ALL: [Self; 2] = [Self::T1, Self::T2];

    /// Returns the transaction that is not `self`.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::T1 => Self::T2,
            Self::T2 => Self::T1,
        }
    }

    /// 0-based index, usable as a column number.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::T1 => 0,
            Self::T2 => 1,
        }
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Self::T1 => write!(f, "T1"),
            Self::T2 => write!(f, "T2"),
        }
    }
}

/// Kind of access an operation performs on its object.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Access {
    Read,
    Write,
}

impl Access {
    #[must_use]
    pub const fn is_write(self) -> bool {
        matches!(self, Self::Write)
    }

    /// The textual marker of this access in the operation-token syntax.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Read => super::token::READ_MARKER,
            Self::Write => super::token::WRITE_MARKER,
        }
    }
}

/// A single read or write of a named object, tagged with the transaction
/// it originates from.
///
/// The tag travels with the operation through interleaving so the conflict
/// graph can tell the two transactions apart.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(::schemars::JsonSchema))]
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Operation<Object> {
    pub transaction: TransactionId,
    pub access: Access,
    pub object: Object,
}

impl<Object> Operation<Object> {
    pub const fn new(transaction: TransactionId, access: Access, object: Object) -> Self {
        Self {
            transaction,
            access,
            object,
        }
    }

    pub const fn read(transaction: TransactionId, object: Object) -> Self {
        Self::new(transaction, Access::Read, object)
    }

    pub const fn write(transaction: TransactionId, object: Object) -> Self {
        Self::new(transaction, Access::Write, object)
    }
}

impl<Object> Operation<Object>
where
    Object: PartialEq,
{
    /// Two operations conflict when they belong to different transactions,
    /// touch the same object and at least one of them writes.
    #[must_use]
    pub fn conflicts_with(&self, other: &Self) -> bool {
        self.transaction != other.transaction
            && self.object == other.object
            && (self.access.is_write() || other.access.is_write())
    }
}

impl<Object> Debug for Operation<Object>
where
    Object: Debug,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        let kind = match self.access {
            Access::Read => 'r',
            Access::Write => 'w',
        };
        write!(f, "{}:{kind}({:?})", self.transaction, self.object)
    }
}

/// Renders the operation in token syntax, e.g. `read_item(X)`.
impl<Object> Display for Operation<Object>
where
    Object: Display,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}({})", self.access.marker(), self.object)
    }
}
