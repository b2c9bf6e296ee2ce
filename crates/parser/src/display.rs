use core::fmt::Write;

use crate::parser::TransactionPair;

/// Format a transaction pair as a document accepted by
/// [`parse_pair`](crate::parse_pair).
///
/// Each transaction goes on one line, statements joined by `; `, preceded by
/// a `// T1` / `// T2` comment. Statements must not contain `;` or line
/// breaks, which is always the case for statements produced by the parser.
#[must_use]
pub fn format_pair(pair: &TransactionPair) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "// T1");
    let _ = writeln!(output, "{}", pair.first.join("; "));
    let _ = writeln!(output, "---");
    let _ = writeln!(output, "// T2");
    let _ = writeln!(output, "{}", pair.second.join("; "));
    output
}
