pub mod app_state;
pub mod candidate;
pub mod location_record;
