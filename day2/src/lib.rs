use parse_rows::{ParseError, Row};
use thiserror::Error;
use tracing::{debug, trace};

/// Largest allowed change between neighbouring levels.
pub const MAX_STEP: u64 = 3;

/// Where a report is heading after the differences seen so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Start,
    Increasing,
    Decreasing,
}

/// Why a report is unsafe. Only the first one found is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("levels did not change")]
    Flat,

    #[error("step of {0} is larger than {max}", max = MAX_STEP)]
    StepTooLarge(i64),

    #[error("step of {diff} turns back after {from:?}")]
    Reversed { from: Direction, diff: i64 },
}

impl Direction {
    /// Applies one difference to the current state.
    pub fn step(self, diff: i64) -> Result<Direction, Violation> {
        if diff == 0 {
            return Err(Violation::Flat);
        }
        if diff.unsigned_abs() > MAX_STEP {
            return Err(Violation::StepTooLarge(diff));
        }
        let next = if diff > 0 {
            Direction::Increasing
        } else {
            Direction::Decreasing
        };
        match self {
            Direction::Start => Ok(next),
            current if current == next => Ok(next),
            from => Err(Violation::Reversed { from, diff }),
        }
    }
}

/// `right - left` for each neighbouring pair, in row order.
///
/// Saturates instead of wrapping, so a huge jump can never look like a small one.
pub fn differences(row: &[i64]) -> impl Iterator<Item = i64> + '_ {
    row.windows(2).map(|pair| pair[1].saturating_sub(pair[0]))
}

/// Single forward pass over the differences, stopping at the first violation.
///
/// Rows with fewer than two levels have no differences and stay at
/// [`Direction::Start`].
pub fn classify(row: &[i64]) -> Result<Direction, Violation> {
    differences(row).try_fold(Direction::Start, Direction::step)
}

pub fn is_safe(row: &[i64]) -> bool {
    classify(row).is_ok()
}

/// Counts the safe rows, aborting on the first row that fails to parse.
pub fn count_safe<I>(rows: I) -> Result<usize, ParseError>
where
    I: IntoIterator<Item = Result<Row, ParseError>>,
{
    let mut total = 0;
    let mut safe = 0;
    for row in rows {
        let row = row?;
        total += 1;
        match classify(&row) {
            Ok(direction) => {
                trace!(report = total, ?direction, "safe");
                safe += 1;
            }
            Err(violation) => trace!(report = total, %violation, "unsafe"),
        }
    }
    debug!(total, safe, "classified reports");
    Ok(safe)
}
