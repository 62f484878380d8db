use async_trait::async_trait;

/// Options forwarded to the host geolocation capability, mirroring the
/// browser geolocation API: request a high-accuracy fix, give the device ten
/// seconds, and refuse any cached fix older than the call itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PositionOptions {
    pub high_accuracy: bool,
    pub timeout_ms: u64,
    pub max_cached_age_ms: u64,
}

/// A coordinate fix reported by the device. `accuracy` is the radius of
/// uncertainty in meters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeviceFix {
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy: f64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PositionError {
    /// The host offers no geolocation capability at all.
    Unsupported,
    /// The capability exists but no fix was produced (denied, timed out,
    /// hardware failure).
    Unavailable(String),
}

impl std::fmt::Display for PositionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            PositionError::Unsupported => write!(f, "Geolocation is not supported by this host"),
            PositionError::Unavailable(e) => write!(f, "No position fix available: {}", e),
        }
    }
}

/// Host-provided "get current position" primitive.
#[async_trait]
pub trait PositionProvider: Send + Sync {
    async fn current_position(&self, options: PositionOptions) -> Result<DeviceFix, PositionError>;
}

/// Deployment without any geolocation source.
pub struct UnsupportedHost;

#[async_trait]
impl PositionProvider for UnsupportedHost {
    async fn current_position(
        &self,
        _options: PositionOptions,
    ) -> Result<DeviceFix, PositionError> {
        Err(PositionError::Unsupported)
    }
}

/// Deployment pinned to known coordinates, configured via the
/// `DEVICE_POSITION` environment variable as `lat,lon,accuracy`.
pub struct FixedPosition {
    fix: DeviceFix,
}

impl FixedPosition {
    pub fn new(fix: DeviceFix) -> Self {
        FixedPosition { fix }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split(',').map(str::trim);
        let latitude = parts.next()?.parse::<f64>().ok()?;
        let longitude = parts.next()?.parse::<f64>().ok()?;
        let accuracy = parts.next()?.parse::<f64>().ok()?;
        if parts.next().is_some() {
            return None;
        }
        if !latitude.is_finite() || !longitude.is_finite() || !accuracy.is_finite() {
            return None;
        }

        Some(FixedPosition::new(DeviceFix {
            latitude,
            longitude,
            accuracy,
        }))
    }
}

#[async_trait]
impl PositionProvider for FixedPosition {
    async fn current_position(
        &self,
        _options: PositionOptions,
    ) -> Result<DeviceFix, PositionError> {
        Ok(self.fix)
    }
}

#[cfg(test)]
pub struct MockPositionProvider {
    next: std::sync::Mutex<Option<Result<DeviceFix, PositionError>>>,
}

#[cfg(test)]
impl MockPositionProvider {
    pub fn new() -> Self {
        MockPositionProvider {
            next: std::sync::Mutex::new(None),
        }
    }

    pub fn set_fix(&self, fix: DeviceFix) {
        *self.next.lock().expect("mock position lock poisoned") = Some(Ok(fix));
    }

    pub fn set_error(&self, error: PositionError) {
        *self.next.lock().expect("mock position lock poisoned") = Some(Err(error));
    }
}

#[cfg(test)]
#[async_trait]
impl PositionProvider for MockPositionProvider {
    async fn current_position(
        &self,
        _options: PositionOptions,
    ) -> Result<DeviceFix, PositionError> {
        self.next
            .lock()
            .expect("mock position lock poisoned")
            .clone()
            .unwrap_or(Err(PositionError::Unsupported))
    }
}
