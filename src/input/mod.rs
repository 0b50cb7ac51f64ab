//! Record parser for the agenda submissions file
//!
//! Reads comma-separated, quote-aware text into rows of raw string fields.
//! The first row is returned like any other; deciding that it is a header
//! belongs to the model mapper.
//!
//! Quoting is strict: a quoted field must be closed, a closing quote must be
//! followed by a delimiter or line end, and an unquoted field may not contain
//! a quote at all.

use crate::error::{AgendaError, AgendaResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// One parsed row of raw text fields
pub type RawRecord = Vec<String>;

/// Why the input is not well-formed CSV
#[derive(Debug, Error)]
pub enum RecordError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("line {line}, field {field}: quoted field is never closed")]
    UnterminatedQuote { line: usize, field: usize },

    #[error("line {line}, field {field}: bare \" in non-quoted field")]
    BareQuote { line: usize, field: usize },

    #[error("line {line}, field {field}: extraneous \" in quoted field")]
    ExtraneousQuote { line: usize, field: usize },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted,
    /// A quote seen inside a quoted field: either an escape or the close
    QuoteInQuoted,
    /// Closing quote followed by `\r`, only `\n` may come next
    ClosedCr,
}

/// Reject input whose quoting the CSV splitter would silently repair
pub fn check_quoting(text: &[u8]) -> Result<(), RecordError> {
    let mut state = QuoteState::FieldStart;
    let mut line = 1;
    let mut field = 1;
    let mut open_line = 1;
    let mut open_field = 1;

    for &byte in text {
        state = match (state, byte) {
            (QuoteState::FieldStart, b'"') => {
                open_line = line;
                open_field = field;
                QuoteState::Quoted
            }
            (QuoteState::Unquoted, b'"') => return Err(RecordError::BareQuote { line, field }),
            (QuoteState::FieldStart | QuoteState::Unquoted | QuoteState::QuoteInQuoted, b',') => {
                field += 1;
                QuoteState::FieldStart
            }
            (
                QuoteState::FieldStart
                | QuoteState::Unquoted
                | QuoteState::QuoteInQuoted
                | QuoteState::ClosedCr,
                b'\n',
            ) => {
                line += 1;
                field = 1;
                QuoteState::FieldStart
            }
            (QuoteState::FieldStart | QuoteState::Unquoted, _) => QuoteState::Unquoted,
            (QuoteState::Quoted, b'"') => QuoteState::QuoteInQuoted,
            (QuoteState::Quoted, b'\n') => {
                line += 1;
                QuoteState::Quoted
            }
            (QuoteState::Quoted, _) => QuoteState::Quoted,
            (QuoteState::QuoteInQuoted, b'"') => QuoteState::Quoted,
            (QuoteState::QuoteInQuoted, b'\r') => QuoteState::ClosedCr,
            (QuoteState::QuoteInQuoted | QuoteState::ClosedCr, _) => {
                return Err(RecordError::ExtraneousQuote { line, field })
            }
        };
    }

    if state == QuoteState::Quoted {
        return Err(RecordError::UnterminatedQuote {
            line: open_line,
            field: open_field,
        });
    }

    Ok(())
}

/// Open `path` and parse every row it contains
pub fn read_records(path: &Path) -> AgendaResult<Vec<RawRecord>> {
    let file = File::open(path).map_err(|e| AgendaError::input_open(path, e))?;
    let records = parse_records(file, path)?;

    debug!(
        path = %path.display(),
        rows = records.len(),
        "Parsed input records"
    );

    Ok(records)
}

/// Parse CSV from any reader; `origin` is only used for error reporting
///
/// Every row must carry the same number of fields as the first one.
pub fn parse_records<R: Read>(mut reader: R, origin: &Path) -> AgendaResult<Vec<RawRecord>> {
    let mut text = Vec::new();
    reader
        .read_to_end(&mut text)
        .map_err(|e| AgendaError::malformed_input(origin, csv::Error::from(e)))?;
    check_quoting(&text).map_err(|e| AgendaError::malformed_input(origin, e))?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .from_reader(text.as_slice());

    csv_reader
        .records()
        .map(|record| {
            record
                .map(|r| r.iter().map(str::to_string).collect())
                .map_err(|e| AgendaError::malformed_input(origin, e))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(text: &str) -> AgendaResult<Vec<RawRecord>> {
        parse_records(text.as_bytes(), Path::new("inline.csv"))
    }

    #[test]
    fn test_parses_rows_in_order() {
        let records = parse("Author,Title\nAusten,Emma\nEliot,Middlemarch\n").unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0], vec!["Author", "Title"]);
        assert_eq!(records[2], vec!["Eliot", "Middlemarch"]);
    }

    #[test]
    fn test_quoted_fields_keep_commas_and_quotes() {
        let records = parse("a,b\n\"Smith, J.\",\"The \"\"Best\"\" Book\"\n").unwrap();
        assert_eq!(records[1][0], "Smith, J.");
        assert_eq!(records[1][1], "The \"Best\" Book");
    }

    #[test]
    fn test_leading_whitespace_is_preserved() {
        let records = parse("a,b\n  padded, value\n").unwrap();
        assert_eq!(records[1], vec!["  padded", " value"]);
    }

    #[test]
    fn test_ragged_rows_are_malformed() {
        let result = parse("a,b,c\n1,2\n");
        assert!(matches!(result, Err(AgendaError::MalformedInput { .. })));
    }

    #[test]
    fn test_unterminated_quote_in_single_column_file() {
        let result = parse("a\n\"never closed\n");
        assert!(matches!(
            result,
            Err(AgendaError::MalformedInput {
                source: RecordError::UnterminatedQuote { line: 2, field: 1 },
                ..
            })
        ));
    }

    #[test]
    fn test_unterminated_quote_in_last_field() {
        let result = parse("a,b\nx,\"never closed\n");
        assert!(matches!(
            result,
            Err(AgendaError::MalformedInput {
                source: RecordError::UnterminatedQuote { line: 2, field: 2 },
                ..
            })
        ));
    }

    #[test]
    fn test_unterminated_quote_is_reported_even_when_row_lengths_match() {
        let result = parse("a,b,c\nx,\"never closed,y\nz,w,v\n");
        assert!(matches!(
            result,
            Err(AgendaError::MalformedInput {
                source: RecordError::UnterminatedQuote { .. },
                ..
            })
        ));
    }

    #[test]
    fn test_bare_quote_in_unquoted_field() {
        let result = parse("a,b\nx,y\"z\n");
        assert!(matches!(
            result,
            Err(AgendaError::MalformedInput {
                source: RecordError::BareQuote { line: 2, field: 2 },
                ..
            })
        ));
    }

    #[test]
    fn test_leading_space_before_quote_is_a_bare_quote() {
        let result = parse("a,b\nx, \"y\"\n");
        assert!(matches!(
            result,
            Err(AgendaError::MalformedInput {
                source: RecordError::BareQuote { .. },
                ..
            })
        ));
    }

    #[test]
    fn test_text_after_closing_quote_is_extraneous() {
        let result = parse("a,b\n\"x\"y,z\n");
        assert!(matches!(
            result,
            Err(AgendaError::MalformedInput {
                source: RecordError::ExtraneousQuote { line: 2, field: 1 },
                ..
            })
        ));
    }

    #[test]
    fn test_quoted_field_may_span_lines_and_end_with_crlf() {
        let records = parse("a,b\r\n\"two\nlines\",\"end\"\r\n\"last\",\"\"").unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1], vec!["two\nlines", "end"]);
        assert_eq!(records[2], vec!["last", ""]);
    }

    #[test]
    fn test_check_quoting_accepts_well_formed_text() {
        assert!(check_quoting(b"").is_ok());
        assert!(check_quoting(b"a,\"b,\"\"c\"\"\",d\n").is_ok());
        assert!(check_quoting(b"\"no trailing newline\"").is_ok());
    }

    #[test]
    fn test_missing_file_is_input_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.csv");

        let error = read_records(&missing).unwrap_err();
        assert!(matches!(error, AgendaError::InputOpen { .. }));
        assert!(error.is_fatal());
    }

    #[test]
    fn test_reads_records_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "h1,h2\nv1,v2\n").unwrap();

        let records = read_records(file.path()).unwrap();
        assert_eq!(records, vec![vec!["h1", "h2"], vec!["v1", "v2"]]);
    }
}
