use axum::{
    routing::{get, post},
    Router,
};

use crate::types::app_state::AppState;

mod get_location_details;
mod get_notifications;
mod get_search_suggestions;
mod post_current_location;
mod post_select_location;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route(
        "/search-suggestions",
        get(get_search_suggestions::get_search_suggestions),
    )
    .route(
        "/select-location",
        post(post_select_location::post_select_location),
    )
    .route(
        "/current-location",
        post(post_current_location::post_current_location),
    )
    .route(
        "/location-details",
        get(get_location_details::get_location_details),
    )
    .route(
        "/notifications",
        get(get_notifications::get_notifications),
    )
}
