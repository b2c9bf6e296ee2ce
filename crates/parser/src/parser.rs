/// Winnow-based parser for transaction pair documents.
///
/// A document holds the statements of two transactions, separated by a line
/// of dashes. Statements end at `;` or at the end of the line; empty
/// statements are ignored. Statements are returned verbatim (trimmed) and
/// are interpreted later by `schedcop_core`.
///
/// Grammar:
/// ```text
/// document   = section separator section EOF
/// separator  = WS? DASH+ WS? (NEWLINE | EOF)
/// section    = (comment | line)*          -- stops before a separator
/// comment    = WS? "//" REST_OF_LINE (NEWLINE | EOF)
/// line       = statement (";" statement)* (NEWLINE | EOF)
/// statement  = [^;\r\n]*
/// ```
use schedcop_core::{analyze, Analysis, Error};
use winnow::ascii::{line_ending, till_line_ending};
use winnow::combinator::{alt, eof, separated};
use winnow::error::{StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{literal, take_till, take_while};
use winnow::ModalResult;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// The raw statements of the two transactions under analysis.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionPair {
    pub first: Vec<String>,
    pub second: Vec<String>,
}

impl TransactionPair {
    #[must_use]
    pub const fn new(first: Vec<String>, second: Vec<String>) -> Self {
        Self { first, second }
    }

    /// Builds a pair from two inline transaction texts such as
    /// `"read_item(X); X:= X-N; write_item(X);"`.
    #[must_use]
    pub fn from_text(first: &str, second: &str) -> Self {
        Self::new(parse_statements(first), parse_statements(second))
    }

    /// Runs the serializability analysis on this pair.
    ///
    /// # Errors
    ///
    /// See [`schedcop_core::analyze`].
    pub fn analyze(&self) -> Result<Analysis<String>, Error> {
        analyze(&self.first, &self.second)
    }
}

/// A parse error with human-readable location information.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "parse error at line {}, column {}: {}",
            self.line, self.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Parse a transaction pair document.
///
/// # Errors
///
/// Returns a [`ParseError`] with line/column information when the document
/// has no separator line or more than one.
pub fn parse_pair(input: &str) -> Result<TransactionPair, ParseError> {
    let original = input;
    let mut stream: &str = input;
    match document.parse_next(&mut stream) {
        Ok(pair) => Ok(pair),
        Err(e) => {
            let consumed = original.len().saturating_sub(stream.len());
            let (line, column) = offset_to_line_col(original, consumed);
            Err(ParseError {
                message: e.to_string(),
                line,
                column,
            })
        }
    }
}

/// Split a single inline transaction into statements on `;` and newlines.
#[must_use]
pub fn parse_statements(text: &str) -> Vec<String> {
    text.split([';', '\n'])
        .map(str::trim)
        .filter(|statement| !statement.is_empty())
        .map(String::from)
        .collect()
}

// ---------------------------------------------------------------------------
// Line/column helper
// ---------------------------------------------------------------------------

/// Convert a byte offset into the original input to 1-based (line, column).
fn offset_to_line_col(input: &str, offset: usize) -> (usize, usize) {
    let prefix = &input[..offset.min(input.len())];
    let line = prefix.bytes().filter(|&b| b == b'\n').count() + 1;
    let column = prefix
        .rfind('\n')
        .map_or_else(|| prefix.len() + 1, |pos| prefix.len() - pos);
    (line, column)
}

// ---------------------------------------------------------------------------
// Leaf parsers
// ---------------------------------------------------------------------------

/// Optional inline whitespace.
fn opt_inline_ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c == ' ' || c == '\t')
        .void()
        .parse_next(input)
}

/// A line ending, or the end of input on the last line.
fn end_of_line(input: &mut &str) -> ModalResult<()> {
    alt((line_ending.void(), eof.void())).parse_next(input)
}

/// Everything up to the next `;` or line break.
fn statement<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_till(0.., |c: char| c == ';' || c == '\n' || c == '\r').parse_next(input)
}

// ---------------------------------------------------------------------------
// Line parsers
// ---------------------------------------------------------------------------

/// `// ...` up to the end of the line. Produces no statements.
fn comment_line(input: &mut &str) -> ModalResult<Vec<String>> {
    opt_inline_ws.parse_next(input)?;
    literal("//").parse_next(input)?;
    till_line_ending.parse_next(input)?;
    end_of_line.parse_next(input)?;
    Ok(Vec::new())
}

/// One line of `;`-separated statements; blank statements are dropped.
fn statement_line(input: &mut &str) -> ModalResult<Vec<String>> {
    let statements: Vec<&str> = separated(1.., statement, ';').parse_next(input)?;
    end_of_line.parse_next(input)?;
    Ok(statements
        .into_iter()
        .map(str::trim)
        .filter(|statement| !statement.is_empty())
        .map(String::from)
        .collect())
}

/// A line made only of dashes (and surrounding inline whitespace).
fn separator(input: &mut &str) -> ModalResult<()> {
    opt_inline_ws.parse_next(input)?;
    take_while(1.., '-').parse_next(input)?;
    opt_inline_ws.parse_next(input)?;
    end_of_line.parse_next(input)
}

fn is_separator_line(input: &str) -> bool {
    input.split('\n').next().is_some_and(|line| {
        let line = line.trim();
        !line.is_empty() && line.chars().all(|c| c == '-')
    })
}

// ---------------------------------------------------------------------------
// Section and document parsers
// ---------------------------------------------------------------------------

/// All statements of one transaction: lines up to a separator or the end of
/// input.
fn section(input: &mut &str) -> ModalResult<Vec<String>> {
    let mut statements = Vec::new();
    while !input.is_empty() && !is_separator_line(input) {
        let mut line = alt((comment_line, statement_line)).parse_next(input)?;
        statements.append(&mut line);
    }
    Ok(statements)
}

fn document(input: &mut &str) -> ModalResult<TransactionPair> {
    let first = section.parse_next(input)?;
    separator
        .context(StrContext::Expected(StrContextValue::Description(
            "a line of dashes between the two transactions",
        )))
        .parse_next(input)?;
    let second = section.parse_next(input)?;
    eof.context(StrContext::Expected(StrContextValue::Description(
        "end of input after the second transaction",
    )))
    .parse_next(input)?;
    Ok(TransactionPair::new(first, second))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
