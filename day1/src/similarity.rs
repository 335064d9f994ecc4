use std::collections::HashMap;

use parse_rows::{FieldNames, ParseError, Record};
use tracing::debug;

/// Occurrence count of every value, per field.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    field_names: FieldNames,
    counts: Vec<HashMap<i64, u64>>,
}

impl FrequencyTable {
    pub fn new(field_names: FieldNames) -> Self {
        let counts = vec![HashMap::new(); field_names.len()];
        Self {
            field_names,
            counts,
        }
    }

    pub fn from_records<I>(field_names: FieldNames, records: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = Result<Record, ParseError>>,
    {
        let mut table = Self::new(field_names);
        for record in records {
            table.insert(&record?);
        }
        Ok(table)
    }

    pub fn insert(&mut self, record: &Record) {
        debug_assert_eq!(record.field_names(), &self.field_names);
        for (counts, value) in self.counts.iter_mut().zip(record.values()) {
            *counts.entry(*value).or_default() += 1;
        }
    }

    /// How often `value` was seen in field `name`; 0 for unknown fields.
    pub fn count(&self, name: &str, value: i64) -> u64 {
        self.field_names
            .position(name)
            .and_then(|idx| self.counts[idx].get(&value))
            .copied()
            .unwrap_or(0)
    }

    /// One score per distinct left value of each neighbouring field pair:
    /// the value times its count in the right field, or 0 when it is absent.
    ///
    /// Emission order within a pair follows the hash map and is unspecified.
    /// Scores are `i128`: an `i64` value times a `u64` count always fits.
    pub fn scores(&self) -> impl Iterator<Item = i128> + '_ {
        self.counts.windows(2).flat_map(|pair| {
            let (left, right) = (&pair[0], &pair[1]);
            left.keys().map(move |&value| {
                right
                    .get(&value)
                    .map_or(0, |&count| i128::from(value) * i128::from(count))
            })
        })
    }
}

/// Sum of [`FrequencyTable::scores`] over all records.
pub fn similarity_score<I>(field_names: &FieldNames, records: I) -> Result<i128, ParseError>
where
    I: IntoIterator<Item = Result<Record, ParseError>>,
{
    let table = FrequencyTable::from_records(field_names.clone(), records)?;
    let score = table.scores().sum::<i128>();
    debug!(score, "summed multiset similarity");
    Ok(score)
}

#[cfg(test)]
mod test {
    use super::*;
    use parse_rows::{Delimiter, RowReader};

    const EXAMPLE: &str = "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n";

    fn names(list: &[&str]) -> FieldNames {
        FieldNames::new(list.iter().copied()).unwrap()
    }

    fn records(input: &str, field_names: &FieldNames) -> Vec<Result<Record, ParseError>> {
        RowReader::new(input.as_bytes(), Delimiter::Whitespace)
            .with_field_names(field_names.clone())
            .collect()
    }

    #[test]
    fn counts_occurrences_per_field() {
        let field_names = names(&["left", "right"]);
        let table =
            FrequencyTable::from_records(field_names.clone(), records(EXAMPLE, &field_names))
                .unwrap();
        assert_eq!(table.count("left", 3), 3);
        assert_eq!(table.count("right", 3), 3);
        assert_eq!(table.count("right", 9), 1);
        assert_eq!(table.count("right", 1), 0);
        assert_eq!(table.count("middle", 3), 0);
    }

    #[test]
    fn example_similarity() {
        let field_names = names(&["left", "right"]);
        let score = similarity_score(&field_names, records(EXAMPLE, &field_names)).unwrap();
        assert_eq!(score, 13);
    }

    #[test]
    fn one_score_per_distinct_left_value() {
        let field_names = names(&["left", "right"]);
        let table =
            FrequencyTable::from_records(field_names.clone(), records(EXAMPLE, &field_names))
                .unwrap();
        let mut scores = table.scores().collect::<Vec<_>>();
        scores.sort_unstable();
        assert_eq!(scores, vec![0, 0, 4, 9]);
    }

    #[test]
    fn absent_values_score_zero() {
        let field_names = names(&["left", "right"]);
        let score = similarity_score(&field_names, records("1 2\n5 6\n", &field_names)).unwrap();
        assert_eq!(score, 0);
    }

    #[test]
    fn negative_values_keep_their_sign() {
        let field_names = names(&["left", "right"]);
        let input = "-2 -2\n7 -2\n";
        let score = similarity_score(&field_names, records(input, &field_names)).unwrap();
        assert_eq!(score, -4);
    }

    #[test]
    fn three_fields_score_each_neighbouring_pair() {
        let field_names = names(&["a", "b", "c"]);
        // a->b: 1 appears twice in b => 2; b->c: 1 once in c => 1, 2 absent => 0
        let input = "1 1 1\n5 1 3\n9 2 4\n";
        let score = similarity_score(&field_names, records(input, &field_names)).unwrap();
        assert_eq!(score, 2 + 1);
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        let field_names = names(&["left", "right"]);
        let input = "9223372036854775807 9223372036854775807\n1 9223372036854775807\n";
        let score = similarity_score(&field_names, records(input, &field_names)).unwrap();
        assert_eq!(score, i128::from(i64::MAX) * 2);
    }

    #[test]
    fn same_input_same_score() {
        let field_names = names(&["left", "right"]);
        let first = similarity_score(&field_names, records(EXAMPLE, &field_names)).unwrap();
        let second = similarity_score(&field_names, records(EXAMPLE, &field_names)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn aborts_on_malformed_input() {
        let field_names = names(&["left", "right"]);
        let result = similarity_score(&field_names, records("1 2\n3 x\n", &field_names));
        assert!(matches!(result, Err(ParseError::MalformedToken { line: 2, .. })));
    }
}
