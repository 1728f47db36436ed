use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Used when `RUST_LOG` is unset: detector events at INFO, dependencies only at WARN.
const DEFAULT_DIRECTIVES: &str = "warn,fake_news_detector=info";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    /// JSON unless `RUST_LOG_FORMAT` names another format.
    fn from_env_value(value: Option<&str>) -> Self {
        match value {
            None => Self::Json,
            Some(v) if v.eq_ignore_ascii_case("json") => Self::Json,
            Some(_) => Self::Pretty,
        }
    }
}

fn env_filter(rust_log: Option<&str>) -> EnvFilter {
    match rust_log {
        Some(directives) if !directives.trim().is_empty() => EnvFilter::new(directives),
        _ => EnvFilter::new(DEFAULT_DIRECTIVES),
    }
}

/// Initialize the tracing subscriber from `RUST_LOG` and `RUST_LOG_FORMAT`.
pub fn init_tracing() {
    let format = LogFormat::from_env_value(std::env::var("RUST_LOG_FORMAT").ok().as_deref());
    let filter = env_filter(std::env::var("RUST_LOG").ok().as_deref());

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true),
            )
            .with(filter)
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init(),
    }
}
