//! Lazy, line-oriented readers that turn delimited text into integer rows.
//!
//! A [`RowReader`] yields one [`Row`] per non-blank line. Attaching
//! [`FieldNames`] turns it into a [`RecordReader`] whose items are keyed by
//! column name and are checked for arity.
mod error;
mod fields;
mod reader;

pub use error::{FieldNamesError, ParseError};
pub use fields::{FieldNames, Record};
pub use reader::{Delimiter, RecordReader, Row, RowReader};
