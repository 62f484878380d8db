use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use crate::{services::presenter, types::app_state::AppState};

pub async fn get_location_details(State(state): State<AppState>) -> Response {
    let selected = state.selected.lock().await;

    Json(presenter::details_view(selected.as_ref())).into_response()
}
