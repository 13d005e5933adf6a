//! Accident and emergency attendance table generation.
//!
//! The three diagnosis columns of one row come from a single diagnosis
//! tuple (see [`crate::diagnosis`]); the remaining columns are drawn
//! independently, column by column.

use chrono::NaiveDate;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::dates::make_random_dates;
use crate::diagnosis::make_diagnosis_tuples;
use crate::error::Result;
use crate::sampling::{sample_ids, sample_with_replacement};

/// Width of the diagnosis tuple carried by each attendance record.
const DIAGNOSIS_ARITY: usize = 3;

/// One row of the attendance table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AeRecord {
    pub id: u32,
    pub date: NaiveDate,
    pub attendance_category: String,
    pub diagnosis_1: Option<u32>,
    pub diagnosis_2: Option<u32>,
    pub diagnosis_3: Option<u32>,
}

impl AeRecord {
    pub const HEADERS: [&'static str; 6] = [
        "id",
        "date",
        "attendance_category",
        "diagnosis_1",
        "diagnosis_2",
        "diagnosis_3",
    ];
}

/// Generate the attendance table.
pub fn make_ae_data(
    rng: &mut ChaCha8Rng,
    max_id: u32,
    nrows: usize,
    start_date: NaiveDate,
    end_date: NaiveDate,
    diagnosis_codes: &[u32],
    attendance_categories: &[&str],
) -> Result<Vec<AeRecord>> {
    let tuples = make_diagnosis_tuples(rng, diagnosis_codes, DIAGNOSIS_ARITY, nrows)?;
    let ids = sample_ids(rng, max_id, nrows)?;
    let dates = make_random_dates(rng, start_date, end_date, nrows, true)?;
    let categories = sample_with_replacement(rng, attendance_categories, nrows)?;

    Ok(ids
        .into_iter()
        .zip(dates)
        .zip(categories)
        .zip(tuples)
        .map(|(((id, date), category), tuple)| AeRecord {
            id,
            date,
            attendance_category: String::from(category),
            diagnosis_1: tuple.slot(0).copied(),
            diagnosis_2: tuple.slot(1).copied(),
            diagnosis_3: tuple.slot(2).copied(),
        })
        .collect())
}
