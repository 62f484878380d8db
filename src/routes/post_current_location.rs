use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::{
    services::location_resolver::resolve_error::ResolveError,
    types::{app_state::AppState, location_record::LocationRecord},
    utils::app_error::AppError,
};

#[derive(Serialize, Deserialize)]
pub struct CurrentLocationResponse {
    pub data: LocationRecord,
}

// Each failure kind gets its own status so a client can tell them apart; the
// toast was already raised by the resolver.
fn status_for(error: ResolveError) -> StatusCode {
    match error {
        ResolveError::CapabilityUnavailable => StatusCode::NOT_IMPLEMENTED,
        ResolveError::PositionUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ResolveError::ReverseLookupFailed => StatusCode::BAD_GATEWAY,
        ResolveError::EmptyResult => StatusCode::NOT_FOUND,
    }
}

pub async fn post_current_location(State(state): State<AppState>) -> Result<Response, AppError> {
    let record = state
        .resolver
        .resolve_current_position()
        .await
        .map_err(|e| {
            error!("Failed to resolve current position: {}", e);
            AppError::new(status_for(e), e.to_string())
        })?;

    *state.selected.lock().await = Some(record.clone());

    Ok(Json(CurrentLocationResponse { data: record }).into_response())
}
