/// DSL macros for building test transactions.
///
/// ```ignore
/// let t1 = txn!(T1: r(X), w(X), r(Y), w(Y));
/// let t2 = txn!(T2: r(X), w(X));
/// ```
///
/// - `r(obj)` → `Operation::read(TransactionId::Tn, "obj")`
/// - `w(obj)` → `Operation::write(TransactionId::Tn, "obj")`
///
/// Build a single Operation.
#[macro_export]
macro_rules! op {
    ($t:ident, r($obj:ident)) => {
        schedcop_core::Operation::<&'static str>::read(
            schedcop_core::TransactionId::$t,
            stringify!($obj),
        )
    };
    ($t:ident, w($obj:ident)) => {
        schedcop_core::Operation::<&'static str>::write(
            schedcop_core::TransactionId::$t,
            stringify!($obj),
        )
    };
}

/// Build the operation list of one transaction.
#[macro_export]
macro_rules! txn {
    ($t:ident: $($kind:ident($obj:ident)),* $(,)?) => {
        vec![$($crate::op!($t, $kind($obj))),*]
    };
}

/// The lost-update pair: T1 moves N from X to Y, T2 adds M to X.
pub const LOST_UPDATE_T1: [&str; 6] = [
    "read_item(X)",
    "X:= X-N",
    "write_item(X)",
    "read_item(Y)",
    "Y:= Y+N",
    "write_item(Y)",
];
pub const LOST_UPDATE_T2: [&str; 3] = ["read_item(X)", "X:= X + M", "write_item(X)"];
