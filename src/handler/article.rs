use crate::app::state::AppState;
use crate::pipeline::AnalysisOutcome;
use crate::samples;
use crate::view::{Panel, render_page};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Debug, Default, Deserialize)]
pub struct ArticleForm {
    #[serde(default)]
    pub article: String,
}

/// Handler for GET /
pub async fn index_handler() -> Html<String> {
    Html(render_page("", &Panel::Empty))
}

/// Handler for POST /example
pub async fn example_handler() -> Html<String> {
    let article = samples::pick(&mut rand::rng());
    info!("Loaded example article");
    Html(render_page(article, &Panel::Empty))
}

/// Browsers submit textarea line breaks as CRLF; the length gate counts a break once.
fn unify_line_breaks(article: &str) -> String {
    article.replace("\r\n", "\n")
}

/// Handler for POST /analyze
pub async fn analyze_handler(
    State(state): State<AppState>,
    Form(form): Form<ArticleForm>,
) -> Response {
    let article = unify_line_breaks(&form.article);
    info!(length = article.chars().count(), "Received analyze request");

    let detector = Arc::clone(&state.detector);
    let task = tokio::task::spawn_blocking(move || {
        let outcome = detector.analyze(&article);
        (article, outcome)
    });
    let (article, outcome) = match task.await {
        Ok(done) => done,
        Err(e) => {
            error!(error = %e, "Analysis task did not complete");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Analysis failed").into_response();
        }
    };

    match outcome {
        Ok(AnalysisOutcome::InputTooShort(_)) => {
            Html(render_page(&article, &Panel::TooShort)).into_response()
        }
        Ok(AnalysisOutcome::Scored(analysis)) => {
            Html(render_page(&article, &Panel::Result(analysis))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to analyze article");
            (StatusCode::INTERNAL_SERVER_ERROR, "Analysis failed").into_response()
        }
    }
}
