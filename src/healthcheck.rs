//! Client side of the `healthcheck` sub-command, run by the container runtime
//! against the server's own health route.
use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

pub const HEALTH_PATH: &str = "/v1/health";

const TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Error, Debug)]
pub enum HealthcheckError {
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Health request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Health endpoint returned status {0}")]
    Status(StatusCode),
}

/// Probe `http://127.0.0.1:{port}/v1/health`; any 2xx answer is healthy.
pub async fn check_health(port: u16) -> Result<(), HealthcheckError> {
    let client = reqwest::Client::builder()
        .timeout(TIMEOUT)
        .build()
        .map_err(HealthcheckError::Client)?;

    let url = format!("http://127.0.0.1:{port}{HEALTH_PATH}");
    let status = client
        .get(&url)
        .send()
        .await
        .map_err(|source| HealthcheckError::Request { url, source })?
        .status();

    if status.is_success() {
        Ok(())
    } else {
        Err(HealthcheckError::Status(status))
    }
}
