//! Correlated multi-field diagnosis sampling.
//!
//! An attendance record carries up to `n` diagnosis fields. The number
//! of diagnoses actually present varies per record, the present codes
//! are mutually distinct, and unused fields sit at the end of the tuple
//! as explicit absences. Sampling the codes without replacement makes
//! the distinctness hold by construction; there is no correction step.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::error::{Result, SynthError};
use crate::sampling::sample_without_replacement;

/// A fixed-width ordered tuple of diagnosis slots.
///
/// Each slot either holds a code or is absent. Absent slots always
/// occupy the highest-indexed positions: once a slot is absent, every
/// slot after it is absent too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosisTuple<T> {
    slots: Vec<Option<T>>,
}

impl<T> DiagnosisTuple<T> {
    /// The fixed tuple width (present and absent slots together).
    pub fn arity(&self) -> usize {
        self.slots.len()
    }

    /// The code in slot `index` (0-based), if present.
    pub fn slot(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(|slot| slot.as_ref())
    }

    /// All slots in position order.
    pub fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    /// The number of non-absent slots.
    pub fn present_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

/// Generate one diagnosis tuple of width `arity` per record.
///
/// Per record, the number of diagnoses `k` is drawn uniformly from
/// `1..=arity`, then `k` distinct codes are drawn without replacement
/// from `vocabulary` and assigned to the leading slots in draw order.
///
/// The preconditions are checked before any draw: the vocabulary must
/// not be empty, the arity must be at least 1, and the vocabulary must
/// hold at least `arity` codes (otherwise a record asking for the full
/// width could not be filled with distinct values).
pub fn make_diagnosis_tuples<T: Clone>(
    rng: &mut ChaCha8Rng,
    vocabulary: &[T],
    arity: usize,
    nrows: usize,
) -> Result<Vec<DiagnosisTuple<T>>> {
    if arity == 0 {
        return Err(SynthError::InvalidParameter {
            reason: String::from("diagnosis arity must be at least 1"),
        });
    }
    if vocabulary.is_empty() {
        return Err(SynthError::InvalidParameter {
            reason: String::from("diagnosis vocabulary must not be empty"),
        });
    }
    if arity > vocabulary.len() {
        return Err(SynthError::VocabularyTooSmall {
            arity,
            vocabulary_size: vocabulary.len(),
        });
    }

    let mut tuples = Vec::with_capacity(nrows);
    for _ in 0..nrows {
        let n_diagnoses = rng.gen_range(1..=arity);
        let codes = sample_without_replacement(rng, vocabulary, n_diagnoses)?;
        let mut slots: Vec<Option<T>> = codes.into_iter().map(Some).collect();
        slots.resize_with(arity, || None);
        tuples.push(DiagnosisTuple { slots });
    }
    Ok(tuples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::HashSet;

    /// The A&E diagnosis vocabulary: codes 0-19 plus the unknown code 99.
    fn vocabulary() -> Vec<u32> {
        (0..20).chain([99]).collect()
    }

    #[test]
    fn vocabulary_smaller_than_arity_is_rejected_before_any_draw() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let result = make_diagnosis_tuples(&mut rng, &[1, 2], 3, 10);
        assert!(matches!(
            result,
            Err(SynthError::VocabularyTooSmall {
                arity: 3,
                vocabulary_size: 2
            })
        ));
        // The failed call must not have consumed any randomness.
        let mut fresh = ChaCha8Rng::seed_from_u64(3);
        assert_eq!(rng.gen::<u64>(), fresh.gen::<u64>());
    }

    #[test]
    fn empty_vocabulary_is_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let empty: &[u32] = &[];
        assert!(make_diagnosis_tuples(&mut rng, empty, 1, 10).is_err());
    }

    #[test]
    fn zero_arity_is_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert!(make_diagnosis_tuples(&mut rng, &vocabulary(), 0, 10).is_err());
    }

    #[test]
    fn present_codes_are_distinct_and_absences_trail() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let tuples = make_diagnosis_tuples(&mut rng, &vocabulary(), 3, 200).unwrap();
        assert_eq!(tuples.len(), 200);
        for tuple in &tuples {
            assert_eq!(tuple.arity(), 3);
            let present = tuple.present_count();
            assert!((1..=3).contains(&present));
            // Distinctness of the present codes.
            let codes: HashSet<u32> = tuple
                .slots()
                .iter()
                .flatten()
                .copied()
                .collect();
            assert_eq!(codes.len(), present);
            // Absent slots occupy the trailing positions.
            for (slot, next) in tuple.slots().iter().zip(tuple.slots().iter().skip(1)) {
                assert!(!(slot.is_none() && next.is_some()));
            }
        }
    }

    #[test]
    fn arity_one_fills_exactly_the_first_slot() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let tuples = make_diagnosis_tuples(&mut rng, &vocabulary(), 1, 50).unwrap();
        for tuple in &tuples {
            assert_eq!(tuple.arity(), 1);
            assert!(tuple.slot(0).is_some());
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_tuples() {
        let mut a = ChaCha8Rng::seed_from_u64(7);
        let mut b = ChaCha8Rng::seed_from_u64(7);
        let tuples_a = make_diagnosis_tuples(&mut a, &vocabulary(), 3, 100).unwrap();
        let tuples_b = make_diagnosis_tuples(&mut b, &vocabulary(), 3, 100).unwrap();
        assert_eq!(tuples_a, tuples_b);
    }
}
