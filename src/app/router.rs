use crate::app::state::AppState;
use crate::handler::article::{analyze_handler, example_handler, index_handler};
use crate::handler::health::health_handler;
use crate::healthcheck::HEALTH_PATH;
use axum::Router;
use axum::routing::{get, post};

/// Build the HTTP router (page + health).
pub fn main_router(state: AppState) -> Router {
    let v1_health_router = Router::new().route(HEALTH_PATH, get(health_handler));

    let page_router = Router::new()
        .route("/", get(index_handler))
        .route("/example", post(example_handler))
        .route("/analyze", post(analyze_handler))
        .with_state(state);

    Router::new().merge(v1_health_router).merge(page_router)
}
