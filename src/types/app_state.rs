use std::sync::Arc;

use tokio::sync::Mutex;

use crate::services::geocoding::geocoding_client::GeocodingClient;
use crate::services::location_resolver::notifier::{Notifier, ToastNotifier};
use crate::services::location_resolver::position::PositionProvider;
use crate::services::location_resolver::resolver::Resolver;
use crate::types::location_record::LocationRecord;

#[derive(Clone)]
pub struct AppState {
    pub resolver: Resolver,
    pub toasts: Arc<ToastNotifier>,
    /// The single "current displayed result" slot carried to the details
    /// view: overwritten on each resolution, never merged, never persisted.
    pub selected: Arc<Mutex<Option<LocationRecord>>>,
}

impl AppState {
    pub fn new(nominatim_host: &str, positions: Arc<dyn PositionProvider>) -> Self {
        let toasts = Arc::new(ToastNotifier::new());
        let notifier: Arc<dyn Notifier> = toasts.clone();
        let resolver = Resolver::new(GeocodingClient::new(nominatim_host), notifier, positions);

        AppState {
            resolver,
            toasts,
            selected: Arc::new(Mutex::new(None)),
        }
    }
}
