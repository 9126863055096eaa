//! # data-service
//!
//! HTTP API over a generated in-memory dataset.
//!
//! ## Endpoints
//!
//! - `GET /large-data` - every item with its count
//! - `GET /filter-large-data?min_value=..&max_value=..` - items whose value lies in the inclusive range
//! - `POST /save-json` - write `{"data": {...}}` to the configured JSON file
//! - `GET /health`, `GET /health/live` - liveness probe

pub mod config;
pub mod dataset;
pub mod error;
pub mod payload;
pub mod routes;
pub mod state;
pub mod storage;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::{ConfigError, ServerConfig};
pub use dataset::{Dataset, Item};
pub use error::{ApiError, Result};
pub use state::AppState;
pub use storage::{JsonStore, StoreError};

/// Build the router with all routes and middleware attached.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health/live", get(routes::liveness))
        .route("/health", get(routes::liveness))
        .route("/large-data", get(routes::get_large_data))
        .route("/filter-large-data", get(routes::filter_large_data))
        .route("/save-json", post(routes::save_json))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
