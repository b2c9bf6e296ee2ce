use alloc::string::String;
use alloc::vec::Vec;

use crate::analysis::error::{Error, MalformedToken};

pub mod token;
pub mod types;

use self::token::parse_token;
use self::types::{Operation, TransactionId};

/// Turn a transaction's raw statements into tagged operations.
///
/// Statements without a read/write marker are skipped.
///
/// # Errors
///
/// Returns [`Error::MalformedToken`] for the first statement that names a
/// read or write without an object, and [`Error::EmptyTransaction`] when no
/// operation is left after skipping.
pub fn parse_transaction<S>(
    transaction: TransactionId,
    tokens: &[S],
) -> Result<Vec<Operation<String>>, Error>
where
    S: AsRef<str>,
{
    let mut operations = Vec::with_capacity(tokens.len());

    for (index, token) in tokens.iter().enumerate() {
        let token = token.as_ref();
        match parse_token(token) {
            Ok(Some((access, object))) => {
                operations.push(Operation::new(transaction, access, object));
            }
            Ok(None) => {
                tracing::trace!(%transaction, index, token, "dropping non-access statement");
            }
            Err(reason) => {
                return Err(MalformedToken {
                    transaction,
                    index,
                    token: String::from(token),
                    reason,
                }
                .into());
            }
        }
    }

    if operations.is_empty() {
        return Err(Error::EmptyTransaction(transaction));
    }

    Ok(operations)
}
