pub mod display;
pub mod parser;

pub use display::format_pair;
pub use parser::{parse_pair, parse_statements, ParseError, TransactionPair};
