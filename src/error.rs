use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DetectorError {
    #[error("Failed to load configuration: {0}")]
    Config(String),

    #[error("Failed to load {kind} artifact from {}: {source}", .path.display())]
    ArtifactLoad {
        kind: &'static str,
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("Failed to bind to address {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}
