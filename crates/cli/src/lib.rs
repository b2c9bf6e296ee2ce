//! schedcop CLI -- enumerate and classify the schedules of two transactions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use schedcop_parser::TransactionPair;

pub mod report;

/// Transaction one of the built-in example: transfer N from X to Y.
pub const DEFAULT_T1: &str = "read_item(X); X:= X-N; write_item(X); read_item(Y); Y:= Y+N;write_item(Y)";
/// Transaction two of the built-in example: add M to X.
pub const DEFAULT_T2: &str = "read_item(X); X:= X + M; write_item(X);";

#[derive(Debug, Parser)]
#[command(
    name = "schedcop",
    about = "Conflict-serializability of every schedule of two transactions"
)]
pub struct App {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify every interleaving of two transactions
    Analyze(AnalyzeArgs),
    /// Generate random transaction pair documents
    Generate(GenerateArgs),
    /// Print the JSON Schema of the `analyze --json` output to stdout
    Schema,
}

#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Statements of transaction one, separated by `;`
    #[arg(long, requires = "t2", conflicts_with = "input")]
    pub t1: Option<String>,
    /// Statements of transaction two, separated by `;`
    #[arg(long, requires = "t1", conflicts_with = "input")]
    pub t2: Option<String>,
    /// Transaction pair document: two transactions separated by a `---` line
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Show the conflict behind every precedence edge
    #[arg(long)]
    pub verbose: bool,
    /// Output the full analysis as JSON
    #[arg(long)]
    pub json: bool,
    /// Exit with status 2 if any schedule is not serializable
    #[arg(long)]
    pub fail_on_unserializable: bool,
}

impl AnalyzeArgs {
    /// The pair given inline with `--t1`/`--t2`, or the built-in example
    /// when neither is given. `None` means the pair comes from `--input`.
    #[must_use]
    pub fn inline_pair(&self) -> Option<TransactionPair> {
        match (&self.t1, &self.t2, &self.input) {
            (Some(t1), Some(t2), _) => Some(TransactionPair::from_text(t1, t2)),
            (_, _, Some(_)) => None,
            _ => Some(default_pair()),
        }
    }
}

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Number of pairs to generate
    #[arg(long)]
    pub n_pair: u64,
    /// Number of distinct objects
    #[arg(long)]
    pub n_object: u64,
    /// Number of read/write operations per transaction
    #[arg(long = "n-op")]
    pub n_operation: u64,
    /// Output directory for generated pair documents
    #[arg(long)]
    pub output_dir: PathBuf,
}

/// The classic lost-update pair.
#[must_use]
pub fn default_pair() -> TransactionPair {
    TransactionPair::from_text(DEFAULT_T1, DEFAULT_T2)
}
