pub mod geocoding_client;
pub mod types;
