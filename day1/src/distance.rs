use parse_rows::{FieldNames, ParseError, Record};
use tracing::debug;

/// One always-sorted multiset per field, fed a whole record at a time.
///
/// Because only complete records are accepted, every column has the same
/// length and positional zipping never drops values.
#[derive(Debug, Clone)]
pub struct SortedColumns {
    field_names: FieldNames,
    columns: Vec<Vec<i64>>,
}

impl SortedColumns {
    pub fn new(field_names: FieldNames) -> Self {
        let columns = vec![Vec::new(); field_names.len()];
        Self {
            field_names,
            columns,
        }
    }

    pub fn from_records<I>(field_names: FieldNames, records: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = Result<Record, ParseError>>,
    {
        let mut sorted = Self::new(field_names);
        for record in records {
            sorted.insert(&record?);
        }
        Ok(sorted)
    }

    pub fn insert(&mut self, record: &Record) {
        debug_assert_eq!(record.field_names(), &self.field_names);
        for (column, value) in self.columns.iter_mut().zip(record.values()) {
            let idx = column.partition_point(|existing| existing <= value);
            column.insert(idx, *value);
        }
    }

    pub fn column(&self, name: &str) -> Option<&[i64]> {
        self.field_names
            .position(name)
            .map(|idx| self.columns[idx].as_slice())
    }

    /// Number of records inserted so far.
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The i-th smallest value of every field, in field order, for each i.
    pub fn tuples(&self) -> impl Iterator<Item = Vec<i64>> + '_ {
        (0..self.len()).map(move |idx| self.columns.iter().map(|column| column[idx]).collect())
    }
}

/// Sum of absolute differences between neighbouring values of one tuple.
///
/// Each difference fits in `u64`; the sum is kept in `u128` so any `i64` input
/// adds up without overflow.
pub fn tuple_distance(tuple: &[i64]) -> u128 {
    tuple
        .windows(2)
        .map(|pair| u128::from(pair[0].abs_diff(pair[1])))
        .sum()
}

/// Sorts every field independently and sums the distances of the
/// positionally paired values.
pub fn total_distance<I>(field_names: &FieldNames, records: I) -> Result<u128, ParseError>
where
    I: IntoIterator<Item = Result<Record, ParseError>>,
{
    let sorted = SortedColumns::from_records(field_names.clone(), records)?;
    let distance = sorted.tuples().map(|tuple| tuple_distance(&tuple)).sum::<u128>();
    debug!(records = sorted.len(), distance, "summed sorted-column distance");
    Ok(distance)
}
