//! Prescribing (PIS) table generation.
//!
//! Columns are drawn independently of each other, one column at a time,
//! then zipped into rows.

use chrono::NaiveDate;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::dates::make_random_dates;
use crate::error::Result;
use crate::sampling::{poisson_count, sample_ids, sample_with_replacement};

/// Mean of the Poisson draw for the number of items beyond the first.
/// A prescribing event always covers at least one item.
const EXTRA_ITEMS_MEAN: f64 = 2.0;

/// How many head rows are copied over the tail of the table.
const DUPLICATED_ROWS: usize = 10;

/// One row of the prescribing table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PisRecord {
    pub id: u32,
    pub paid_date: NaiveDate,
    /// Zero-padded British National Formulary section, e.g. "0101".
    pub bnf_section: String,
    pub num_items: u32,
}

impl PisRecord {
    pub const HEADERS: [&'static str; 4] = ["id", "paid_date", "bnf_section", "num_items"];
}

/// Generate the prescribing table.
///
/// When the table is large enough, the first [`DUPLICATED_ROWS`] rows
/// are copied over the last ones, so the fixture contains exact
/// duplicate records for downstream deduplication code to chew on.
pub fn make_pis_data(
    rng: &mut ChaCha8Rng,
    max_id: u32,
    nrows: usize,
    start_date: NaiveDate,
    end_date: NaiveDate,
    bnf_sections: &[String],
) -> Result<Vec<PisRecord>> {
    let ids = sample_ids(rng, max_id, nrows)?;
    let paid_dates = make_random_dates(rng, start_date, end_date, nrows, true)?;
    let sections = sample_with_replacement(rng, bnf_sections, nrows)?;
    let mut num_items = Vec::with_capacity(nrows);
    for _ in 0..nrows {
        num_items.push(poisson_count(rng, EXTRA_ITEMS_MEAN)? + 1);
    }

    let mut records: Vec<PisRecord> = ids
        .into_iter()
        .zip(paid_dates)
        .zip(sections)
        .zip(num_items)
        .map(|(((id, paid_date), bnf_section), num_items)| PisRecord {
            id,
            paid_date,
            bnf_section,
            num_items,
        })
        .collect();

    if nrows >= 2 * DUPLICATED_ROWS {
        for index in 0..DUPLICATED_ROWS {
            records[nrows - DUPLICATED_ROWS + index] = records[index].clone();
        }
    }

    Ok(records)
}
