//! Catalogue dispatch.
//!
//! Runs a catalogue entry against the configured Saleor API with JSON
//! variables and returns the response data as JSON. Variables are checked
//! against the entry before anything is sent.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::post,
};
use serde_json::Value;
use tracing::instrument;

use crate::error::AppError;
use crate::saleor::{SaleorError, catalogue};
use crate::state::AppState;

/// Build the catalogue router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/catalogue/{key}", post(run_entry))
}

/// Run one catalogue entry.
#[instrument(skip(state, variables))]
async fn run_entry(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(variables): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let entry = catalogue::find(&key)?;

    let variables = entry.check(&variables).map_err(|e| match e {
        SaleorError::Contract(_) => AppError::Saleor(e),
        other => AppError::BadRequest(format!("variables for {key}: {other}")),
    })?;

    let data = state.saleor().query_entry(entry, variables).await?;
    Ok(Json(data))
}
