use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::{
    routes::apply_routes, services::location_resolver::position::PositionProvider,
    types::app_state::AppState,
};

pub fn gen_app(nominatim_host: &str, positions: Arc<dyn PositionProvider>) -> Router {
    gen_app_with_state(AppState::new(nominatim_host, positions))
}

pub fn gen_app_with_state(state: AppState) -> Router {
    let cors_middleware = CorsLayer::new();

    apply_routes(Router::new())
        .route("/", get(root))
        .layer(cors_middleware)
        .with_state(state)
}

// basic handler that responds with a static string
async fn root() -> &'static str {
    "Hello, World!"
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub nominatim_server: mockito::ServerGuard,
    pub positions: Arc<crate::services::location_resolver::position::MockPositionProvider>,
    pub toasts: Arc<crate::services::location_resolver::notifier::ToastNotifier>,
}

#[cfg(test)]
pub async fn gen_mock_app() -> MockApp {
    use crate::services::location_resolver::position::MockPositionProvider;

    let nominatim_server = mockito::Server::new_async().await;
    let positions = Arc::new(MockPositionProvider::new());

    let state = AppState::new(nominatim_server.url().as_str(), positions.clone());
    let toasts = state.toasts.clone();
    let app = gen_app_with_state(state);

    MockApp {
        app,
        nominatim_server,
        positions,
        toasts,
    }
}
