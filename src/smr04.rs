//! Inpatient stay and episode generation (the SMR04 table).
//!
//! In hospital episode statistics a stay is a group of episodes
//! representing one continuous period in hospital. Episodes within a
//! stay are chained: each episode begins on the date the previous one
//! ended, and the whole chain shares one CIS marker (cis = continuous
//! integrated stay). Marker values are only meaningful within a single
//! identifier's history -- the same number can appear under different
//! identifiers -- but successive stays for one identifier always carry
//! successive markers.
//!

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::dates::make_random_dates;
use crate::error::{Result, SynthError};
use crate::sampling::{pick, poisson_count};

/// Mean of the Poisson draw for the number of episodes beyond the
/// first. Every stay has at least one episode.
const EXTRA_EPISODES_MEAN: f64 = 1.0;

/// Mean episode duration in days. A zero-day episode is fine; an
/// episode need not take a whole day.
const EPISODE_DURATION_MEAN: f64 = 1.0;

/// Admission-type codes from the SMR04 data dictionary.
/// https://publichealthscotland.scot/media/24927/smr04_crib_270323.pdf
pub const ADMISSION_TYPES: [u32; 19] = [
    10, 11, 12, 18, 19, 20, 21, 22, 31, 32, 33, 34, 35, 36, 38, 39, 30, 40, 48,
];

/// Psychiatric specialty codes appearing on SMR04 episodes.
pub const SPECIALTIES: [&str; 12] = [
    "CC", "G1", "G2", "G21", "G22", "G3", "G4", "G5", "G6", "G61", "G62", "G63",
];

/// One row of the SMR04 table: a single episode within a stay.
///
/// The field order here is the column order of the output table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Episode {
    pub id: u32,
    pub admission_date: NaiveDate,
    pub discharge_date: NaiveDate,
    pub cis_marker: u32,
    /// 1-based position of the episode within its stay.
    pub episode_within_cis: u32,
    /// Present only on the first episode of a stay.
    pub admission_type: Option<u32>,
    /// Present on every episode.
    pub specialty: String,
}

impl Episode {
    pub const HEADERS: [&'static str; 7] = [
        "id",
        "admission_date",
        "discharge_date",
        "cis_marker",
        "episode_within_cis",
        "admission_type",
        "specialty",
    ];
}

/// Parameters for one run of the stay sequencer.
#[derive(Debug, Clone)]
pub struct StayParams<'a> {
    /// Identifiers are drawn with replacement from `0..max_id`.
    pub max_id: u32,
    /// Stay start dates are drawn from `[start_date, end_date]`.
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Number of stays to generate. Each stay contributes one or more
    /// episode rows.
    pub nstays: usize,
    pub admission_types: &'a [u32],
    pub specialties: &'a [&'a str],
}

/// Tracks the last CIS marker issued to each identifier during one
/// sequencer run. The registry lives only for the duration of the run;
/// markers are not persisted anywhere.
#[derive(Debug, Default)]
struct MarkerRegistry {
    markers: HashMap<u32, u32>,
}

impl MarkerRegistry {
    fn new() -> Self {
        Self::default()
    }

    /// The marker for an identifier's next stay: the previous marker
    /// plus one, or a fresh base value in `1..=100` if this identifier
    /// has not been seen before. The absolute value of the base is
    /// irrelevant; only the increment between successive stays matters.
    fn next_marker(&mut self, rng: &mut ChaCha8Rng, id: u32) -> u32 {
        let marker = match self.markers.get(&id) {
            Some(previous) => previous + 1,
            None => rng.gen_range(0..100) + 1,
        };
        self.markers.insert(id, marker);
        marker
    }
}

/// Chain episodes for one stay from its start date and the pre-drawn
/// per-episode values.
///
/// The admission date of each episode is the discharge date of the one
/// before it, starting from `stay_start`. The admission type belongs to
/// the first episode only; every other episode leaves the field absent.
fn build_stay(
    id: u32,
    cis_marker: u32,
    stay_start: NaiveDate,
    admission_type: u32,
    durations: &[u32],
    specialties: &[&str],
) -> Vec<Episode> {
    let mut cursor = stay_start;
    let mut episodes = Vec::with_capacity(durations.len());
    for (position, (duration, specialty)) in durations.iter().zip(specialties).enumerate() {
        let admission_date = cursor;
        let discharge_date = admission_date + Duration::days(i64::from(*duration));
        cursor = discharge_date;
        episodes.push(Episode {
            id,
            admission_date,
            discharge_date,
            cis_marker,
            episode_within_cis: position as u32 + 1,
            admission_type: (position == 0).then_some(admission_type),
            specialty: String::from(*specialty),
        });
    }
    episodes
}

/// Generate the SMR04 episode table.
///
/// Stay start dates are drawn without replacement, so no two stays in
/// one table begin on the same calendar date (a simplifying fixture
/// constraint). Stays are emitted in the order their start dates were
/// drawn, episodes in position order within each stay.
pub fn make_smr04_data(rng: &mut ChaCha8Rng, params: &StayParams) -> Result<Vec<Episode>> {
    if params.max_id == 0 {
        return Err(SynthError::InvalidParameter {
            reason: String::from("identifier population size must be positive"),
        });
    }
    if params.admission_types.is_empty() {
        return Err(SynthError::InvalidParameter {
            reason: String::from("admission type vocabulary must not be empty"),
        });
    }
    if params.specialties.is_empty() {
        return Err(SynthError::InvalidParameter {
            reason: String::from("specialty vocabulary must not be empty"),
        });
    }

    let start_dates = make_random_dates(
        rng,
        params.start_date,
        params.end_date,
        params.nstays,
        false,
    )?;

    let mut registry = MarkerRegistry::new();
    let mut episodes = Vec::new();

    for stay_start in start_dates {
        let id = rng.gen_range(0..params.max_id);
        let cis_marker = registry.next_marker(rng, id);

        // + 1 so a stay never has zero episodes.
        let n_episodes = poisson_count(rng, EXTRA_EPISODES_MEAN)? + 1;

        let admission_type = pick(rng, params.admission_types)?;
        let mut durations = Vec::with_capacity(n_episodes as usize);
        let mut specialties = Vec::with_capacity(n_episodes as usize);
        for _ in 0..n_episodes {
            durations.push(poisson_count(rng, EPISODE_DURATION_MEAN)?);
            specialties.push(pick(rng, params.specialties)?);
        }

        episodes.extend(build_stay(
            id,
            cis_marker,
            stay_start,
            admission_type,
            &durations,
            &specialties,
        ));
    }

    Ok(episodes)
}
