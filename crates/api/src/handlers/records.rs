use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use serde::de::DeserializeOwned;
use tracing::{instrument, warn};

use crate::{
    dto::{AddRecordRequest, RecordResponse, RemoveRecordRequest},
    errors::ApiError,
    state::AppState,
};

/// Bodies are decoded as JSON whatever the `Content-Type`, so plain
/// `curl -d '{"url":...}'` clients keep working.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, "Rejecting malformed request body");
        ApiError::from(e)
    })
}

#[instrument(skip(state, body))]
pub async fn add_record(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<&'static str, ApiError> {
    let req: AddRecordRequest = parse_body(&body)?;

    state.set_record.execute(&req.url, &req.ip).await?;
    Ok("record added")
}

#[instrument(skip(state, body))]
pub async fn remove_record(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<&'static str, ApiError> {
    let req: RemoveRecordRequest = parse_body(&body)?;

    state.delete_record.execute(&req.url).await?;
    Ok("record removed")
}

#[instrument(skip(state))]
pub async fn get_record(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<RecordResponse>, ApiError> {
    let ip = state.get_record.execute(&name).await?;
    Ok(Json(RecordResponse { url: name, ip }))
}
