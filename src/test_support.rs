//! Shared test support utilities
//!
//! Stub classifiers and a small vocabulary for unit tests that exercise the
//! pipeline without real model weights.

use crate::domain::Probability;
use crate::error::DetectorError;
use crate::port::Classifier;
use crate::preprocess::{EncodedSequence, Vocabulary};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Classifier that always returns the same probability and records what it saw.
pub struct FixedClassifier {
    probability: f64,
    calls: AtomicUsize,
    last_sequence: Mutex<Option<Vec<u32>>>,
}

impl FixedClassifier {
    pub fn new(probability: f64) -> Self {
        Self {
            probability,
            calls: AtomicUsize::new(0),
            last_sequence: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_sequence(&self) -> Option<Vec<u32>> {
        self.last_sequence.lock().unwrap().clone()
    }
}

impl Classifier for FixedClassifier {
    fn predict(&self, sequence: &EncodedSequence) -> Result<Probability, DetectorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_sequence.lock().unwrap() = Some(sequence.as_slice().to_vec());
        Probability::new(self.probability)
    }
}

/// Classifier that fails every prediction.
pub struct FailingClassifier;

impl Classifier for FailingClassifier {
    fn predict(&self, _sequence: &EncodedSequence) -> Result<Probability, DetectorError> {
        Err(DetectorError::Inference("Mock inference failure".to_string()))
    }
}

/// A few political-news words with ids starting at 1, no OOV token.
pub fn senate_vocabulary() -> Vocabulary {
    let words = [
        "the", "senate", "house", "bill", "president", "white", "congress", "election",
    ];
    let index: HashMap<String, u32> = words
        .iter()
        .zip(1u32..)
        .map(|(word, id)| ((*word).to_string(), id))
        .collect();
    Vocabulary::new(index, None, None).unwrap()
}
