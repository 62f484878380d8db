mod app;
mod routes;
mod services;
mod types;
mod utils;

use std::env;
use std::sync::Arc;

use tracing::info;

use crate::services::location_resolver::position::{
    FixedPosition, PositionProvider, UnsupportedHost,
};

const DEFAULT_NOMINATIM_HOST: &str = "https://nominatim.openstreetmap.org";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    info!("Starting app...");

    let nominatim_host =
        env::var("NOMINATIM_HOST").unwrap_or_else(|_| DEFAULT_NOMINATIM_HOST.to_string());

    // DEVICE_POSITION=lat,lon,accuracy pins this deployment to a fixed fix;
    // without it the host reports no geolocation capability.
    let positions: Arc<dyn PositionProvider> = match env::var("DEVICE_POSITION") {
        Ok(raw) => Arc::new(
            FixedPosition::parse(&raw).expect("DEVICE_POSITION must be lat,lon,accuracy"),
        ),
        Err(_) => Arc::new(UnsupportedHost),
    };

    let app = app::gen_app(nominatim_host.as_str(), positions);

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await.unwrap();
    info!("Listening on port {}", port);
    axum::serve(listener, app).await.unwrap();
}
