//! Error types for the dataset generators.
//!
//! Parameter problems are detected before any random draw happens, so a
//! failed generator call never leaves a partially generated table behind.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SynthError {
    /// A without-replacement draw asked for more items than the
    /// population contains.
    #[error("cannot draw {requested} items without replacement from a population of {available}")]
    InsufficientRange { requested: usize, available: usize },

    /// The diagnosis tuple width exceeds the code vocabulary, so the
    /// required number of distinct codes cannot be drawn.
    #[error("diagnosis arity {arity} exceeds the vocabulary size {vocabulary_size}")]
    VocabularyTooSmall { arity: usize, vocabulary_size: usize },

    /// A degenerate generator parameter (empty vocabulary, zero
    /// identifier population, reversed date range, ...).
    #[error("invalid parameter: {reason}")]
    InvalidParameter { reason: String },

    /// CSV serialization failed.
    #[error("csv serialization failed: {0}")]
    Csv(#[from] csv::Error),

    /// Writing an output file failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SynthError>;
