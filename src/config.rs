use std::env;
use std::path::PathBuf;

use crate::error::DetectorError;

pub const DEFAULT_HTTP_PORT: u16 = 8501;
const DEFAULT_MODEL_PATH: &str = "fake_news_model.json";
const DEFAULT_TOKENIZER_PATH: &str = "tokenizer.json";

#[derive(Debug, Clone)]
pub struct Settings {
    /// Port serving the page and the health endpoint
    pub http_port: u16,
    /// Exported classifier weights
    pub model_path: PathBuf,
    /// Exported tokenizer vocabulary
    pub tokenizer_path: PathBuf,
}

impl Settings {
    /// Validates the settings and returns an error if invalid.
    pub fn validate(&self) -> Result<(), DetectorError> {
        validate_port(self.http_port)?;
        validate_path("FAKE_NEWS_MODEL_PATH", &self.model_path)?;
        validate_path("FAKE_NEWS_TOKENIZER_PATH", &self.tokenizer_path)?;
        Ok(())
    }
}

fn validate_port(port: u16) -> Result<(), DetectorError> {
    if port == 0 {
        return Err(DetectorError::Config("Port cannot be 0".into()));
    }
    Ok(())
}

fn validate_path(name: &str, path: &std::path::Path) -> Result<(), DetectorError> {
    if path.as_os_str().is_empty() {
        return Err(DetectorError::Config(format!("{name} cannot be empty")));
    }
    Ok(())
}

fn env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

pub fn get_configuration() -> Result<Settings, DetectorError> {
    let raw_port = env_or("HTTP_PORT", &DEFAULT_HTTP_PORT.to_string());
    let http_port = raw_port
        .parse::<u16>()
        .map_err(|e| DetectorError::Config(format!("Invalid HTTP_PORT {raw_port:?}: {e}")))?;
    let model_path = PathBuf::from(env_or("FAKE_NEWS_MODEL_PATH", DEFAULT_MODEL_PATH));
    let tokenizer_path = PathBuf::from(env_or("FAKE_NEWS_TOKENIZER_PATH", DEFAULT_TOKENIZER_PATH));

    let settings = Settings {
        http_port,
        model_path,
        tokenizer_path,
    };

    settings.validate()?;

    Ok(settings)
}
