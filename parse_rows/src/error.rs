use std::{io, num::ParseIntError};

use thiserror::Error;

/// Failure while turning a line of input into a row.
///
/// Line numbers are 1-based and count blank lines too, so they match what an
/// editor shows for the input file.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read line {line}")]
    Io {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: `{token}` is not a valid integer")]
    MalformedToken {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("line {line}: expected {expected} field(s), found {found}")]
    FieldArityMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::Io { line, .. }
            | ParseError::MalformedToken { line, .. }
            | ParseError::FieldArityMismatch { line, .. } => *line,
        }
    }
}

/// Rejected list of field names.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldNamesError {
    #[error("at least one field name is required")]
    Empty,

    #[error("field name `{0}` given more than once")]
    Duplicate(String),
}
