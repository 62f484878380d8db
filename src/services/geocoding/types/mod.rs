pub mod geocoding_error;
pub mod reverse_place;
