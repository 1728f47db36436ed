//! Article analysis: length gate → normalize → encode → predict → classify.
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::artifacts::Artifacts;
use crate::domain::{Article, InputTooShort, Probability, Verdict, classify};
use crate::error::DetectorError;
use crate::port::Classifier;
use crate::preprocess::{SequenceEncoder, Vocabulary, normalize};

/// Scored article.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analysis {
    pub probability: Probability,
    pub verdict: Verdict,
    /// Ids taken from the article before padding.
    pub token_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnalysisOutcome {
    /// Rejected by the length gate; nothing was encoded or scored.
    InputTooShort(InputTooShort),
    Scored(Analysis),
}

pub struct Detector {
    vocabulary: Arc<Vocabulary>,
    classifier: Arc<dyn Classifier>,
    encoder: SequenceEncoder,
}

impl Detector {
    #[must_use]
    pub fn new(vocabulary: Arc<Vocabulary>, classifier: Arc<dyn Classifier>) -> Self {
        Self {
            vocabulary,
            classifier,
            encoder: SequenceEncoder::default(),
        }
    }

    #[must_use]
    pub fn from_artifacts(artifacts: &Artifacts) -> Self {
        Self::new(
            Arc::clone(&artifacts.vocabulary),
            Arc::clone(&artifacts.classifier),
        )
    }

    #[must_use]
    pub fn with_encoder(mut self, encoder: SequenceEncoder) -> Self {
        self.encoder = encoder;
        self
    }

    /// Run the full pipeline on a pasted article.
    ///
    /// # Errors
    /// Returns [`DetectorError::Inference`] when the classifier fails; a short
    /// article is an [`AnalysisOutcome::InputTooShort`], not an error.
    pub fn analyze(&self, raw: &str) -> Result<AnalysisOutcome, DetectorError> {
        let article = match Article::parse(raw) {
            Ok(article) => article,
            Err(too_short) => {
                warn!(length = too_short.length, "Article rejected: too short");
                return Ok(AnalysisOutcome::InputTooShort(too_short));
            }
        };

        let cleaned = normalize(article.text());
        let sequence = self.encoder.encode(&cleaned, &self.vocabulary);
        debug!(
            cleaned_chars = cleaned.len(),
            tokens = sequence.content_len(),
            max_len = self.encoder.max_len(),
            "Encoded article"
        );

        let probability = self.classifier.predict(&sequence)?;
        let verdict = classify(probability);
        info!(
            probability = probability.value(),
            verdict = %verdict,
            tokens = sequence.content_len(),
            "Article analyzed"
        );

        Ok(AnalysisOutcome::Scored(Analysis {
            probability,
            verdict,
            token_count: sequence.content_len(),
        }))
    }
}
