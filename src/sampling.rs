//! Draw helpers shared by the table generators.
//!
//! Every function takes the generator as an explicit `&mut ChaCha8Rng`
//! argument. The order of calls against one generator is significant:
//! it fixes which value lands in which record, and with it the exact
//! content of the output tables for a given seed.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_distr::Poisson;

use crate::error::{Result, SynthError};

/// Draw `count` items from `population`, allowing repeats.
pub fn sample_with_replacement<T: Clone>(
    rng: &mut ChaCha8Rng,
    population: &[T],
    count: usize,
) -> Result<Vec<T>> {
    if population.is_empty() {
        return Err(SynthError::InvalidParameter {
            reason: String::from("cannot sample from an empty population"),
        });
    }
    Ok((0..count)
        .map(|_| population[rng.gen_range(0..population.len())].clone())
        .collect())
}

/// Draw `count` distinct items from `population`, in draw order.
///
/// Fails if `count` exceeds the population size, before any draw is
/// made.
pub fn sample_without_replacement<T: Clone>(
    rng: &mut ChaCha8Rng,
    population: &[T],
    count: usize,
) -> Result<Vec<T>> {
    if count > population.len() {
        return Err(SynthError::InsufficientRange {
            requested: count,
            available: population.len(),
        });
    }
    let indices = rand::seq::index::sample(rng, population.len(), count);
    Ok(indices
        .into_iter()
        .map(|index| population[index].clone())
        .collect())
}

/// A single categorical draw from `population`.
pub fn pick<T: Clone>(rng: &mut ChaCha8Rng, population: &[T]) -> Result<T> {
    population
        .choose(rng)
        .cloned()
        .ok_or_else(|| SynthError::InvalidParameter {
            reason: String::from("cannot pick from an empty population"),
        })
}

/// A Poisson-distributed non-negative integer with the given mean.
pub fn poisson_count(rng: &mut ChaCha8Rng, mean: f64) -> Result<u32> {
    let distribution = Poisson::new(mean).map_err(|_| SynthError::InvalidParameter {
        reason: format!("invalid poisson mean {mean}"),
    })?;
    let count: f64 = distribution.sample(rng);
    Ok(count as u32)
}

/// Draw `count` identifiers uniformly from `0..max_id`, with
/// replacement. Identifiers are deliberately allowed to repeat so the
/// generated tables contain individuals with more than one record.
pub fn sample_ids(rng: &mut ChaCha8Rng, max_id: u32, count: usize) -> Result<Vec<u32>> {
    if max_id == 0 {
        return Err(SynthError::InvalidParameter {
            reason: String::from("identifier population size must be positive"),
        });
    }
    Ok((0..count).map(|_| rng.gen_range(0..max_id)).collect())
}
