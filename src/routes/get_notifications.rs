use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{services::location_resolver::notifier::Notification, types::app_state::AppState};

#[derive(Serialize, Deserialize)]
pub struct GetNotificationsResponseData {
    pub notifications: Vec<Notification>,
}

#[derive(Serialize, Deserialize)]
pub struct GetNotificationsResponse {
    pub data: GetNotificationsResponseData,
}

pub async fn get_notifications(State(state): State<AppState>) -> Response {
    Json(GetNotificationsResponse {
        data: GetNotificationsResponseData {
            notifications: state.toasts.active(),
        },
    })
    .into_response()
}
