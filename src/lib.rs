//! Synthetic administrative healthcare datasets for use as test fixtures.
//!
//! The crate generates four tables of the kind found in Scottish
//! administrative health data: prescribing events (PIS), accident and
//! emergency attendances (A&E), mental-health inpatient episodes (SMR04),
//! and long-term-condition onset dates (LTC). None of the data is real;
//! values are drawn from seeded random number generators so that a fixed
//! seed always reproduces the same tables.
//!
//! Each table is generated by its own function taking an explicit
//! `&mut ChaCha8Rng`, so tests can seed and re-seed generators without
//! touching any global state. Use [`make_rng`] to derive one generator
//! per table from a single global seed.
//!

pub use error::{Result, SynthError};
pub use seeded_rng::make_rng;

pub mod ae;
pub mod dates;
pub mod diagnosis;
pub mod error;
pub mod ltc;
pub mod pis;
pub mod sampling;
pub mod seeded_rng;
pub mod smr04;
pub mod table;
