use std::{
    fs::File,
    io::{self, BufRead, BufReader, Lines},
    path::Path,
};

use tracing::trace;

use crate::{
    error::ParseError,
    fields::{FieldNames, Record},
};

/// One parsed line, in source column order.
pub type Row = Vec<i64>;

/// How columns are separated within a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delimiter {
    /// Runs of ASCII whitespace.
    Whitespace,
    Literal(String),
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter::Literal(",".to_string())
    }
}

impl From<&str> for Delimiter {
    /// A separator made only of whitespace (or nothing at all) splits on
    /// whitespace runs, so column-aligned input parses without empty tokens.
    fn from(value: &str) -> Self {
        if value.trim().is_empty() {
            Delimiter::Whitespace
        } else {
            Delimiter::Literal(value.to_string())
        }
    }
}

impl Delimiter {
    /// Splits `text` and parses every trimmed token as a signed integer.
    pub fn parse_line(&self, text: &str, line: usize) -> Result<Row, ParseError> {
        match self {
            Delimiter::Whitespace => parse_tokens(text.split_ascii_whitespace(), line),
            Delimiter::Literal(sep) => parse_tokens(text.split(sep.as_str()), line),
        }
    }
}

fn parse_tokens<'a>(
    tokens: impl Iterator<Item = &'a str>,
    line: usize,
) -> Result<Row, ParseError> {
    tokens
        .map(|token| {
            let token = token.trim();
            token
                .parse::<i64>()
                .map_err(|source| ParseError::MalformedToken {
                    line,
                    token: token.to_string(),
                    source,
                })
        })
        .collect()
}

/// Single forward pass over the lines of `R`, one [`Row`] per non-blank line.
///
/// Lines that are empty or hold only whitespace are skipped, wherever they
/// appear, and never produce a row or an error. They still count towards the
/// line numbers reported in errors.
///
/// Stops for good after the first error. To read the input again, build a
/// new reader.
#[derive(Debug)]
pub struct RowReader<R> {
    lines: Lines<R>,
    delimiter: Delimiter,
    line: usize,
    failed: bool,
}

impl RowReader<BufReader<File>> {
    /// Opens `path` for reading. The file is closed when the reader is dropped.
    pub fn open<P: AsRef<Path>>(path: P, delimiter: Delimiter) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file), delimiter))
    }
}

impl<R: BufRead> RowReader<R> {
    pub fn new(reader: R, delimiter: Delimiter) -> Self {
        Self {
            lines: reader.lines(),
            delimiter,
            line: 0,
            failed: false,
        }
    }

    pub fn with_field_names(self, field_names: FieldNames) -> RecordReader<R> {
        RecordReader {
            rows: self,
            field_names,
        }
    }
}

impl<R> RowReader<R> {
    /// Number of source lines consumed so far, blank ones included.
    pub fn lines_read(&self) -> usize {
        self.line
    }

    fn fail<T>(&mut self, err: ParseError) -> Result<T, ParseError> {
        self.failed = true;
        Err(err)
    }
}

impl<R: BufRead> Iterator for RowReader<R> {
    type Item = Result<Row, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let read = self.lines.next()?;
            self.line += 1;
            let text = match read {
                Ok(text) => text,
                Err(source) => {
                    let line = self.line;
                    return Some(self.fail(ParseError::Io { line, source }));
                }
            };
            if text.trim().is_empty() {
                trace!(line = self.line, "skipping blank line");
                continue;
            }
            return Some(match self.delimiter.parse_line(&text, self.line) {
                Ok(row) => Ok(row),
                Err(err) => self.fail(err),
            });
        }
    }
}

/// [`RowReader`] whose rows are keyed by [`FieldNames`].
#[derive(Debug)]
pub struct RecordReader<R> {
    rows: RowReader<R>,
    field_names: FieldNames,
}

impl<R> RecordReader<R> {
    pub fn field_names(&self) -> &FieldNames {
        &self.field_names
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<Record, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = match self.rows.next()? {
            Ok(row) => row,
            Err(err) => return Some(Err(err)),
        };
        let found = row.len();
        Some(match self.field_names.record(row) {
            Some(record) => Ok(record),
            None => {
                let err = ParseError::FieldArityMismatch {
                    line: self.rows.line,
                    expected: self.field_names.len(),
                    found,
                };
                self.rows.fail(err)
            }
        })
    }
}
