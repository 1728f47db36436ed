mod router;
pub mod server;
pub mod state;
pub mod tracing;

pub use router::main_router;

use crate::artifacts;
use crate::config;
use crate::error::DetectorError;
use tokio_util::sync::CancellationToken;

/// Application entry point. Initializes tracing, configuration and artifacts, then serves the page.
pub async fn run() -> Result<(), DetectorError> {
    // Handle healthcheck subcommand (for Docker healthcheck in distroless image)
    if std::env::args().nth(1).as_deref() == Some("healthcheck") {
        let port = config::get_configuration()
            .map(|settings| settings.http_port)
            .unwrap_or(config::DEFAULT_HTTP_PORT);
        match crate::check_health(port).await {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("Healthcheck failed: {e}");
                std::process::exit(1)
            }
        }
    }

    tracing::init_tracing();

    let settings = config::get_configuration()?;
    ::tracing::info!(
        port = settings.http_port,
        model = %settings.model_path.display(),
        tokenizer = %settings.tokenizer_path.display(),
        "Loaded settings"
    );

    // Missing or corrupt artifacts abort startup before the listener is bound.
    let artifacts = artifacts::load_artifacts(&settings)?;
    let app_state = state::AppState::from_artifacts(&artifacts);
    let app = main_router(app_state);

    server::serve(app, settings.http_port, CancellationToken::new()).await
}
