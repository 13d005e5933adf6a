//! Calendar-date sampling from a bounded interval.

use chrono::NaiveDate;
use rand_chacha::ChaCha8Rng;

use crate::error::{Result, SynthError};
use crate::sampling::{sample_with_replacement, sample_without_replacement};

/// Every day in the inclusive interval `[start, end]`.
pub fn day_range(start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>> {
    if end < start {
        return Err(SynthError::InvalidParameter {
            reason: format!("date range end {end} is before start {start}"),
        });
    }
    Ok(start.iter_days().take_while(|day| *day <= end).collect())
}

/// Draw `nrows` dates from the inclusive interval `[start, end]`.
///
/// With `replace` false the drawn dates are all distinct, and the call
/// fails with [`SynthError::InsufficientRange`] if `nrows` exceeds the
/// number of days in the interval.
pub fn make_random_dates(
    rng: &mut ChaCha8Rng,
    start: NaiveDate,
    end: NaiveDate,
    nrows: usize,
    replace: bool,
) -> Result<Vec<NaiveDate>> {
    let days = day_range(start, end)?;
    if replace {
        sample_with_replacement(rng, &days, nrows)
    } else {
        sample_without_replacement(rng, &days, nrows)
    }
}
