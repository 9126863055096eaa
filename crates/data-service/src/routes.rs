//! API route handlers

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::error::Result;
use crate::payload::{FilterParams, ResponsePayload, SaveConfirmation, SaveRequest};
use crate::state::AppState;

/// Serialize eagerly so encoding failures surface as internal errors.
fn json_response<T: Serialize>(value: &T) -> Result<Response> {
    let body = serde_json::to_vec(value)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// Liveness probe - is the server running?
pub async fn liveness() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// The full dataset.
pub async fn get_large_data(State(state): State<AppState>) -> Result<Response> {
    let payload: ResponsePayload<'_> = state.dataset.items().iter().collect();
    json_response(&payload)
}

/// Items with `min_value <= value <= max_value`.
pub async fn filter_large_data(
    State(state): State<AppState>,
    params: std::result::Result<Query<FilterParams>, QueryRejection>,
) -> Result<Response> {
    let Query(FilterParams {
        min_value,
        max_value,
    }) = params?;

    let payload = ResponsePayload::new(state.dataset.filter_by_value(min_value, max_value));
    tracing::debug!(min_value, max_value, count = payload.count(), "filtered dataset");
    json_response(&payload)
}

/// Overwrite the save file with the `data` object of the request body.
pub async fn save_json(
    State(state): State<AppState>,
    body: std::result::Result<Json<SaveRequest>, JsonRejection>,
) -> Result<Json<SaveConfirmation>> {
    let Json(SaveRequest { data }) = body?;
    let keys = data.len();

    state.store.save(data).await?;

    tracing::info!(path = %state.store.path().display(), keys, "saved JSON document");
    Ok(Json(SaveConfirmation::default()))
}
