//! Console rendering of an analysis.

use std::fmt::Write;

use schedcop_core::graph::ConflictKind;
use schedcop_core::{Analysis, AnalyzedSchedule, TransactionId};

const RULE: &str = "----------------------------------------";
const COLUMN_WIDTH: usize = 20;

const fn conflict_label(kind: ConflictKind) -> &'static str {
    match kind {
        ConflictKind::WriteRead => "write-read",
        ConflictKind::ReadWrite => "read-write",
        ConflictKind::WriteWrite => "write-write",
    }
}

/// One schedule as a two-column table followed by its verdict.
#[must_use]
pub fn render_schedule(analyzed: &AnalyzedSchedule<String>, verbose: bool) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "{RULE}");
    let _ = writeln!(output, "Schedule: {}", analyzed.schedule.index);
    let _ = writeln!(output, "{:<COLUMN_WIDTH$}Transaction 2", "Transaction 1");
    let _ = writeln!(output, "{RULE}");

    for operation in &analyzed.schedule.operations {
        let _ = match operation.transaction {
            TransactionId::T1 => writeln!(output, "{operation}"),
            TransactionId::T2 => writeln!(output, "{:COLUMN_WIDTH$}{operation}", ""),
        };
    }

    let _ = writeln!(output, "{RULE}");

    if analyzed.result.is_serializable() {
        let orders: Vec<String> = analyzed
            .result
            .serial_orders()
            .iter()
            .map(ToString::to_string)
            .collect();
        let _ = writeln!(output, "Serializable: Yes");
        let _ = writeln!(output, "Equivalent serial order: {}", orders.join(" or "));
        if analyzed.equivalents.is_empty() {
            let _ = writeln!(output, "Equivalents: none");
        } else {
            let equivalents: Vec<String> =
                analyzed.equivalents.iter().map(ToString::to_string).collect();
            let _ = writeln!(output, "Equivalents: {}", equivalents.join(", "));
        }
    } else {
        let _ = writeln!(output, "Serializable: No");
    }

    if verbose {
        if analyzed.graph.edge_count() == 0 {
            let _ = writeln!(output, "No conflicts between T1 and T2");
        }
        for source in TransactionId::ALL {
            if let Some(conflict) = analyzed.graph.edge(source) {
                let _ = writeln!(
                    output,
                    "Edge {source} -> {}: {} on {} (positions {} -> {})",
                    source.other(),
                    conflict_label(conflict.kind),
                    conflict.object,
                    conflict.earlier,
                    conflict.later
                );
            }
        }
    }

    output
}

/// Every schedule, then a one-line summary.
#[must_use]
pub fn render(analysis: &Analysis<String>, verbose: bool) -> String {
    let mut output = String::new();
    for analyzed in analysis {
        output.push_str(&render_schedule(analyzed, verbose));
        output.push('\n');
    }
    let _ = writeln!(
        output,
        "{} schedules, {} serializable",
        analysis.len(),
        analysis.serializable_count()
    );
    output
}
