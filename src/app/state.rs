use crate::artifacts::Artifacts;
use crate::pipeline::Detector;
use std::sync::Arc;

/// Shared application state holding the read-only detector.
#[derive(Clone)]
pub struct AppState {
    pub detector: Arc<Detector>,
}

impl AppState {
    #[must_use]
    pub fn new(detector: Detector) -> Self {
        Self {
            detector: Arc::new(detector),
        }
    }

    /// Create `AppState` from the process-wide artifacts.
    #[must_use]
    pub fn from_artifacts(artifacts: &Artifacts) -> Self {
        Self::new(Detector::from_artifacts(artifacts))
    }
}
