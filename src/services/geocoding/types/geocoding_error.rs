#[derive(Debug)]
pub enum GeocodingError {
    Request(String),
    Decode(String),
}

impl std::fmt::Display for GeocodingError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            GeocodingError::Request(e) => write!(f, "Request failed: {}", e),
            GeocodingError::Decode(e) => write!(f, "Failed to decode response: {}", e),
        }
    }
}
