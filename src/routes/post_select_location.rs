use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::types::{app_state::AppState, candidate::Candidate, location_record::LocationRecord};

#[derive(Serialize, Deserialize)]
pub struct SelectLocationResponse {
    pub data: LocationRecord,
}

pub async fn post_select_location(
    State(state): State<AppState>,
    Json(candidate): Json<Candidate>,
) -> Response {
    let record = state.resolver.resolve_selection(candidate);

    *state.selected.lock().await = Some(record.clone());

    Json(SelectLocationResponse { data: record }).into_response()
}
