//! Recognition of `read_item(obj)` / `write_item(obj)` statements.
//!
//! A transaction is written as a list of statements such as
//! `read_item(X)`, `X:= X-N`, `write_item(X)`. Only the read and write
//! statements carry conflict information; everything else is dropped.

use alloc::string::String;
use core::fmt::{Display, Formatter};

use super::types::Access;

pub const READ_MARKER: &str = "read_item";
pub const WRITE_MARKER: &str = "write_item";

/// A statement names a read or write but does not say which object.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// No `(` with a matching `)` after it.
    MissingParenthesis,
    /// The parentheses enclose only whitespace.
    EmptyObject,
}

impl Display for TokenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingParenthesis => write!(f, "no parenthesized object"),
            Self::EmptyObject => write!(f, "empty object name"),
        }
    }
}

/// Classify a single statement.
///
/// Returns `Ok(None)` for statements that mention neither marker (e.g.
/// assignments like `X:= X-N`). The object is the trimmed text strictly
/// between the first `(` and the first `)` following it.
///
/// # Errors
///
/// Returns a [`TokenError`] when the statement carries a marker but no
/// usable object name.
pub fn parse_token(token: &str) -> Result<Option<(Access, String)>, TokenError> {
    let token = token.trim();
    let access = if token.contains(WRITE_MARKER) {
        Access::Write
    } else if token.contains(READ_MARKER) {
        Access::Read
    } else {
        return Ok(None);
    };

    let object = token
        .find('(')
        .map(|open| &token[open + 1..])
        .and_then(|rest| rest.find(')').map(|close| rest[..close].trim()))
        .ok_or(TokenError::MissingParenthesis)?;

    if object.is_empty() {
        return Err(TokenError::EmptyObject);
    }

    Ok(Some((access, String::from(object))))
}
