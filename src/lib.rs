use axum::Router;
use tracing_subscriber::EnvFilter;

use crate::config::{Log, LogFormat};
use crate::handler::{AppState, any_origin, cors, json_content_type};

pub mod api;
pub mod config;
pub mod error;
pub mod handler;
pub mod items;
pub mod model;
pub mod store;

/// The full service. CORS runs ahead of routing and answers OPTIONS
/// preflights itself; the origin and content-type layers wrap it so
/// preflight replies carry `*` and are marked as JSON too.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api/items", items::routes())
        .layer(cors())
        .layer(any_origin())
        .layer(json_content_type())
        .with_state(state)
}

/// `RUST_LOG` takes precedence over the configured filter.
pub fn init_tracing(log: &Log) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));
    match log.format {
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}
