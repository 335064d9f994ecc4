use std::sync::Arc;

use crate::{error::FieldNamesError, reader::Row};

/// Ordered, duplicate-free column labels shared by every record of one run.
///
/// Cloning is cheap; all records produced by a reader point at the same list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNames(Arc<[String]>);

impl FieldNames {
    pub fn new<I, S>(names: I) -> Result<Self, FieldNamesError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut collected: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if collected.contains(&name) {
                return Err(FieldNamesError::Duplicate(name));
            }
            collected.push(name);
        }
        if collected.is_empty() {
            return Err(FieldNamesError::Empty);
        }
        Ok(Self(collected.into()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|field| field == name)
    }

    /// Neighbouring fields in configured order, `(left, right)`.
    pub fn adjacent_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }

    /// Keys `values` by these names, or `None` when the counts differ.
    pub fn record(&self, values: Row) -> Option<Record> {
        (values.len() == self.len()).then(|| Record {
            field_names: self.clone(),
            values,
        })
    }
}

/// One row keyed by field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    field_names: FieldNames,
    values: Row,
}

impl Record {
    pub fn get(&self, name: &str) -> Option<i64> {
        self.field_names.position(name).map(|idx| self.values[idx])
    }

    /// Values in field-name order.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn field_names(&self) -> &FieldNames {
        &self.field_names
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.field_names.iter().zip(self.values.iter().copied())
    }
}
