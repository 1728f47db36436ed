//! Process-wide, load-once model and tokenizer.
//!
//! Artifacts are read from disk on first access and then shared read-only for
//! the rest of the process. A failed load is reported to the caller and leaves
//! the cache empty; startup treats it as fatal.
use std::path::Path;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use tracing::info;

use crate::adapter::BiLstmClassifier;
use crate::config::Settings;
use crate::error::DetectorError;
use crate::port::Classifier;
use crate::preprocess::Vocabulary;

/// Trained classifier and the vocabulary it was trained with.
pub struct Artifacts {
    pub vocabulary: Arc<Vocabulary>,
    pub classifier: Arc<dyn Classifier>,
}

impl Artifacts {
    /// Read both artifacts from the configured paths.
    ///
    /// # Errors
    /// Returns [`DetectorError::ArtifactLoad`] naming the artifact that could not be loaded.
    pub fn load(settings: &Settings) -> Result<Self, DetectorError> {
        let vocabulary = load_vocabulary(&settings.tokenizer_path)?;
        let classifier = load_classifier(&settings.model_path)?;
        Ok(Self {
            vocabulary: Arc::new(vocabulary),
            classifier: Arc::new(classifier),
        })
    }
}

fn load_vocabulary(path: &Path) -> Result<Vocabulary, DetectorError> {
    let vocabulary = Vocabulary::from_path(path).map_err(|source| DetectorError::ArtifactLoad {
        kind: "tokenizer",
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        tokens = vocabulary.len(),
        oov = vocabulary.oov_id().is_some(),
        "Loaded tokenizer"
    );
    Ok(vocabulary)
}

fn load_classifier(path: &Path) -> Result<BiLstmClassifier, DetectorError> {
    let classifier =
        BiLstmClassifier::from_path(path).map_err(|source| DetectorError::ArtifactLoad {
            kind: "model",
            path: path.to_path_buf(),
            source,
        })?;
    info!(
        path = %path.display(),
        vocab_size = classifier.vocab_size(),
        "Loaded classifier"
    );
    Ok(classifier)
}

/// At-most-once initializer: concurrent first callers wait on the loader instead of racing it.
pub struct ArtifactCache {
    cell: OnceLock<Arc<Artifacts>>,
    init: Mutex<()>,
}

impl ArtifactCache {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
            init: Mutex::new(()),
        }
    }

    /// Cached artifacts, running `load` only if nothing has been cached yet.
    ///
    /// # Errors
    /// Propagates the loader's error; the next call retries the load.
    pub fn get_or_load<F>(&self, load: F) -> Result<Arc<Artifacts>, DetectorError>
    where
        F: FnOnce() -> Result<Artifacts, DetectorError>,
    {
        if let Some(artifacts) = self.cell.get() {
            return Ok(Arc::clone(artifacts));
        }
        let _guard = self.init.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(artifacts) = self.cell.get() {
            return Ok(Arc::clone(artifacts));
        }
        let artifacts = Arc::new(load()?);
        Ok(Arc::clone(self.cell.get_or_init(|| artifacts)))
    }
}

impl Default for ArtifactCache {
    fn default() -> Self {
        Self::new()
    }
}

static ARTIFACTS: ArtifactCache = ArtifactCache::new();

/// Process-wide artifacts, loaded from `settings` on first call.
///
/// # Errors
/// Returns [`DetectorError::ArtifactLoad`] when either artifact is missing or corrupt.
pub fn load_artifacts(settings: &Settings) -> Result<Arc<Artifacts>, DetectorError> {
    ARTIFACTS.get_or_load(|| Artifacts::load(settings))
}
