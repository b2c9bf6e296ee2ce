use alloc::string::String;
use core::fmt::{Display, Formatter, Result};

use derive_more::From;

use crate::operation::token::TokenError;
use crate::operation::types::TransactionId;

/// A statement that names a read or write but has no usable object.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedToken {
    pub transaction: TransactionId,
    /// 0-based index of the statement in the transaction's token list.
    pub index: usize,
    pub token: String,
    pub reason: TokenError,
}

/// Input rejected before any interleaving is generated.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, From)]
pub enum Error {
    #[from]
    MalformedToken(MalformedToken),
    /// The transaction contains no recognized read or write.
    EmptyTransaction(TransactionId),
}

impl Display for MalformedToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{} statement {} `{}`: {}",
            self.transaction, self.index, self.token, self.reason
        )
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::MalformedToken(token) => write!(f, "malformed operation in {token}"),
            Self::EmptyTransaction(transaction) => {
                write!(f, "{transaction} contains no read_item or write_item")
            }
        }
    }
}

impl core::error::Error for Error {}
