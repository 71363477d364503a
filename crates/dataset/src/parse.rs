//! Winnow-based parser for whitespace-separated row files.
//!
//! Grammar:
//! ```text
//! file    = (comment | blank | row)*
//! comment = "//" REST_OF_LINE
//! row     = token (WHITESPACE token)*
//! token   = any run of non-whitespace characters
//! ```
//!
//! One row per line. The file is numeric when the first token of the
//! first row parses as an integer (auto-detection, so the same reader
//! handles ID files and raw symbolic event logs); a numeric file
//! containing a non-numeric token later is a parse error naming the
//! offending line and column.

use winnow::ascii::dec_int;
use winnow::combinator::separated;
use winnow::prelude::*;
use winnow::token::take_while;
use winnow::ModalResult;

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

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

/// Rows read from a file, in whichever item form the file used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowData {
    /// Every token parsed as an integer.
    Numeric(Vec<Vec<i64>>),
    /// Tokens kept as symbolic items (map them with
    /// [`ItemMap`](crate::ItemMap) before mining).
    Symbolic(Vec<Vec<String>>),
}

/// Parse a whitespace-separated row file into numeric or symbolic rows.
///
/// Blank lines and `//` comment lines are skipped. The numeric/symbolic
/// decision follows the first token of the first row.
///
/// # Errors
///
/// Returns a [`ParseError`] with line/column information when a numeric
/// file contains a token that is not an integer.
pub fn parse_rows(input: &str) -> Result<RowData, ParseError> {
    let mut rows: Vec<(usize, Vec<String>)> = Vec::new();

    for (line_index, line) in input.lines().enumerate() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with("//") {
            continue;
        }
        let mut stream = line;
        match row_parser.parse_next(&mut stream) {
            Ok(tokens) => rows.push((line_index + 1, tokens)),
            Err(e) => {
                let consumed = line.len().saturating_sub(stream.len());
                return Err(ParseError {
                    message: e.to_string(),
                    line: line_index + 1,
                    column: consumed + 1,
                });
            }
        }
    }

    let numeric = rows
        .first()
        .and_then(|(_, tokens)| tokens.first())
        .is_some_and(|token| integer.parse(token.as_str()).is_ok());

    if !numeric {
        return Ok(RowData::Symbolic(
            rows.into_iter().map(|(_, tokens)| tokens).collect(),
        ));
    }

    let mut numeric_rows: Vec<Vec<i64>> = Vec::with_capacity(rows.len());
    for (line, tokens) in rows {
        let mut values: Vec<i64> = Vec::with_capacity(tokens.len());
        for token in tokens {
            match integer.parse(token.as_str()) {
                Ok(value) => values.push(value),
                Err(_) => {
                    return Err(ParseError {
                        message: format!("expected an integer, found `{token}`"),
                        line,
                        column: 1,
                    });
                }
            }
        }
        numeric_rows.push(values);
    }
    Ok(RowData::Numeric(numeric_rows))
}

/// Render rows back into the whitespace-separated file format, one row
/// per line.
#[must_use]
pub fn format_rows<T: core::fmt::Display>(rows: &[Vec<T>]) -> String {
    let mut out = String::new();
    for row in rows {
        for (index, value) in row.iter().enumerate() {
            if index > 0 {
                out.push(' ');
            }
            out.push_str(&value.to_string());
        }
        out.push('\n');
    }
    out
}

// ---------------------------------------------------------------------------
// Leaf parsers
// ---------------------------------------------------------------------------

/// Inline whitespace: spaces and tabs.
fn inline_ws(input: &mut &str) -> ModalResult<()> {
    take_while(1.., |c: char| c == ' ' || c == '\t')
        .void()
        .parse_next(input)
}

/// One token: a run of non-whitespace characters.
fn token(input: &mut &str) -> ModalResult<String> {
    take_while(1.., |c: char| !c.is_whitespace())
        .map(|s: &str| s.to_string())
        .parse_next(input)
}

/// A signed decimal integer covering a whole token.
fn integer(input: &mut &str) -> ModalResult<i64> {
    dec_int.parse_next(input)
}

/// A full row: tokens separated by inline whitespace, with optional
/// surrounding whitespace.
fn row_parser(input: &mut &str) -> ModalResult<Vec<String>> {
    let _ = take_while(0.., |c: char| c == ' ' || c == '\t')
        .void()
        .parse_next(input)?;
    let tokens = separated(1.., token, inline_ws).parse_next(input)?;
    let _ = take_while(0.., |c: char| c == ' ' || c == '\t')
        .void()
        .parse_next(input)?;
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_rows() {
        let parsed = parse_rows("1 2 3\n1 3\n2 3\n").unwrap();
        assert_eq!(
            parsed,
            RowData::Numeric(vec![vec![1, 2, 3], vec![1, 3], vec![2, 3]])
        );
    }

    #[test]
    fn test_parse_symbolic_rows() {
        let parsed = parse_rows("login browse checkout\nlogin logout\n").unwrap();
        assert_eq!(
            parsed,
            RowData::Symbolic(vec![
                vec!["login".into(), "browse".into(), "checkout".into()],
                vec!["login".into(), "logout".into()],
            ])
        );
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let parsed = parse_rows("// sequences\n\n1 2\n\n// trailing\n3\n").unwrap();
        assert_eq!(parsed, RowData::Numeric(vec![vec![1, 2], vec![3]]));
    }

    #[test]
    fn test_parse_negative_numbers() {
        let parsed = parse_rows("-1 2\n").unwrap();
        assert_eq!(parsed, RowData::Numeric(vec![vec![-1, 2]]));
    }

    #[test]
    fn test_numeric_file_with_bad_token_names_line() {
        let err = parse_rows("1 2\n3 oops 4\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert!(err.message.contains("oops"), "unexpected: {err}");
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_rows("").unwrap(), RowData::Symbolic(vec![]));
    }

    #[test]
    fn test_format_rows_roundtrip() {
        let rows = vec![vec![1, 2, 3], vec![4, 5]];
        let text = format_rows(&rows);
        assert_eq!(text, "1 2 3\n4 5\n");
        assert_eq!(parse_rows(&text).unwrap(), RowData::Numeric(rows));
    }
}
