pub mod geocoding;
pub mod location_resolver;
pub mod presenter;
