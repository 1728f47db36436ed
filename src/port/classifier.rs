//! Classifier trait for scoring encoded articles.
//!
//! The trained model is opaque to the rest of the crate: handlers and the
//! pipeline only see this trait, so tests can swap in a stub.

use crate::domain::Probability;
use crate::error::DetectorError;
use crate::preprocess::EncodedSequence;

/// Scores a fixed-length id sequence with a fake-news probability.
///
/// Implementations must be deterministic for identical weights and input.
pub trait Classifier: Send + Sync {
    /// Fake-news probability for `sequence`.
    ///
    /// # Errors
    /// Returns [`DetectorError::Inference`] when the sequence does not fit the
    /// model's input contract or the model produces a non-probability.
    fn predict(&self, sequence: &EncodedSequence) -> Result<Probability, DetectorError>;
}
