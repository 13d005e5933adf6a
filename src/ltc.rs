//! Long-term-condition (LTC) table generation.
//!
//! One row per identifier, one column per condition. A cell holds the
//! onset date of that condition for that individual, or is absent when
//! the individual does not have the condition.

use chrono::NaiveDate;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::dates::day_range;
use crate::error::{Result, SynthError};
use crate::sampling::pick;

/// Probability that an individual has any one condition.
const CONDITION_PREVALENCE: f64 = 0.2;

/// One row of the long-term-conditions table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LtcRecord {
    pub id: u32,
    pub asthma: Option<NaiveDate>,
    pub diabetes: Option<NaiveDate>,
    pub parkinsons: Option<NaiveDate>,
}

impl LtcRecord {
    pub const HEADERS: [&'static str; 4] = ["id", "asthma", "diabetes", "parkinsons"];
}

/// Generate the long-term-conditions table, one row for every
/// identifier in `0..max_id` in order.
pub fn make_ltc_data(
    rng: &mut ChaCha8Rng,
    max_id: u32,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Vec<LtcRecord>> {
    if max_id == 0 {
        return Err(SynthError::InvalidParameter {
            reason: String::from("identifier population size must be positive"),
        });
    }
    let days = day_range(start_date, end_date)?;

    let mut records = Vec::with_capacity(max_id as usize);
    for id in 0..max_id {
        let asthma = condition_onset(rng, &days)?;
        let diabetes = condition_onset(rng, &days)?;
        let parkinsons = condition_onset(rng, &days)?;
        records.push(LtcRecord {
            id,
            asthma,
            diabetes,
            parkinsons,
        });
    }
    Ok(records)
}

/// Decide whether a condition is present, and if so draw its onset
/// date from the configured interval.
fn condition_onset(rng: &mut ChaCha8Rng, days: &[NaiveDate]) -> Result<Option<NaiveDate>> {
    if rng.gen_bool(CONDITION_PREVALENCE) {
        Ok(Some(pick(rng, days)?))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeded_rng::make_rng;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn generate() -> Vec<LtcRecord> {
        let mut rng = make_rng(1234, "ltc");
        make_ltc_data(&mut rng, 20, date(2015, 1, 1), date(2017, 12, 31)).unwrap()
    }

    #[test]
    fn one_row_per_identifier_in_order() {
        let records = generate();
        assert_eq!(records.len(), 20);
        for (index, record) in records.iter().enumerate() {
            assert_eq!(record.id, index as u32);
        }
    }

    #[test]
    fn onset_dates_stay_within_the_interval() {
        for record in generate() {
            for onset in [record.asthma, record.diabetes, record.parkinsons]
                .iter()
                .flatten()
            {
                assert!(*onset >= date(2015, 1, 1));
                assert!(*onset <= date(2017, 12, 31));
            }
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_table() {
        assert_eq!(generate(), generate());
    }

    #[test]
    fn zero_identifier_population_is_rejected() {
        let mut rng = make_rng(1234, "ltc");
        assert!(make_ltc_data(&mut rng, 0, date(2015, 1, 1), date(2017, 12, 31)).is_err());
    }
}
