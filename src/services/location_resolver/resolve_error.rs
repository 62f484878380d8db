/// Terminal failure of a device-position resolution. Every variant maps to
/// exactly one user notification at the point it occurs; nothing here is
/// fatal to the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolveError {
    /// The host exposes no geolocation capability.
    CapabilityUnavailable,
    /// The device denied or failed to produce a fix within the timeout.
    PositionUnavailable,
    /// The reverse lookup failed at the network or decode level.
    ReverseLookupFailed,
    /// The reverse lookup succeeded but returned no usable address.
    EmptyResult,
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ResolveError::CapabilityUnavailable => write!(f, "Geolocation not supported"),
            ResolveError::PositionUnavailable => write!(f, "Unable to retrieve a position fix"),
            ResolveError::ReverseLookupFailed => write!(f, "Reverse lookup failed"),
            ResolveError::EmptyResult => write!(f, "Reverse lookup returned no usable address"),
        }
    }
}
