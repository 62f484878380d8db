use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::Duration;
use tracing::error;

use super::notifier::{NotificationKind, Notifier};
use super::position::{DeviceFix, PositionError, PositionOptions, PositionProvider};
use super::resolve_error::ResolveError;
use crate::services::geocoding::geocoding_client::GeocodingClient;
use crate::types::{candidate::Candidate, location_record::LocationRecord};

// Queries shorter than this never reach the network.
const MIN_QUERY_CHARS: usize = 3;

const DEVICE_FIX_OPTIONS: PositionOptions = PositionOptions {
    high_accuracy: true,
    timeout_ms: 10_000,
    max_cached_age_ms: 0,
};

/// Observable workflow state. Re-entrant: a new action supersedes whatever
/// the prior cycle would have written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolverPhase {
    Idle,
    Searching,
    Suggesting,
    AwaitingFix,
    AwaitingReverseLookup,
}

impl ResolverPhase {
    fn as_u8(self) -> u8 {
        match self {
            ResolverPhase::Idle => 0,
            ResolverPhase::Searching => 1,
            ResolverPhase::Suggesting => 2,
            ResolverPhase::AwaitingFix => 3,
            ResolverPhase::AwaitingReverseLookup => 4,
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            1 => ResolverPhase::Searching,
            2 => ResolverPhase::Suggesting,
            3 => ResolverPhase::AwaitingFix,
            4 => ResolverPhase::AwaitingReverseLookup,
            _ => ResolverPhase::Idle,
        }
    }
}

pub enum SearchOutcome {
    /// Suggestions for the most recent qualifying query, upstream order
    /// preserved. Empty for short queries, empty results, and recovered
    /// failures.
    Suggestions(Vec<Candidate>),
    /// A newer search was issued while this one was in flight; its result
    /// is discarded so a stale response can never overwrite a fresher one.
    Superseded,
}

/// Turns free-text input or a device coordinate into a `LocationRecord`.
/// Every terminal outcome, success or failure, raises exactly one toast, and
/// no failure propagates as anything but a typed error.
#[derive(Clone)]
pub struct Resolver {
    client: GeocodingClient,
    notifier: Arc<dyn Notifier>,
    positions: Arc<dyn PositionProvider>,
    search_seq: Arc<AtomicU64>,
    phase: Arc<AtomicU8>,
}

impl Resolver {
    pub fn new(
        client: GeocodingClient,
        notifier: Arc<dyn Notifier>,
        positions: Arc<dyn PositionProvider>,
    ) -> Self {
        Resolver {
            client,
            notifier,
            positions,
            search_seq: Arc::new(AtomicU64::new(0)),
            phase: Arc::new(AtomicU8::new(ResolverPhase::Idle.as_u8())),
        }
    }

    pub fn phase(&self) -> ResolverPhase {
        ResolverPhase::from_u8(self.phase.load(Ordering::SeqCst))
    }

    fn set_phase(&self, phase: ResolverPhase) {
        self.phase.store(phase.as_u8(), Ordering::SeqCst);
    }

    fn next_search_token(&self) -> u64 {
        self.search_seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub async fn search_by_text(&self, query: &str) -> SearchOutcome {
        if query.chars().count() < MIN_QUERY_CHARS {
            // Still advances the token: a search in flight for the previous,
            // longer query must not land on top of the now-empty list.
            self.next_search_token();
            self.set_phase(ResolverPhase::Idle);
            return SearchOutcome::Suggestions(Vec::new());
        }

        let token = self.next_search_token();
        self.set_phase(ResolverPhase::Searching);
        self.run_search(query, token).await
    }

    async fn run_search(&self, query: &str, token: u64) -> SearchOutcome {
        let result = self.client.search(query).await;

        // A stale response must not overwrite the outcome of a newer search,
        // so anything issued before the latest token is dropped on the floor.
        if self.search_seq.load(Ordering::SeqCst) != token {
            return SearchOutcome::Superseded;
        }

        match result {
            Ok(candidates) if candidates.is_empty() => {
                self.notifier.notify(
                    NotificationKind::Error,
                    "No location found",
                    Duration::milliseconds(5000),
                );
                self.set_phase(ResolverPhase::Idle);
                SearchOutcome::Suggestions(candidates)
            }
            Ok(candidates) => {
                self.notifier.notify(
                    NotificationKind::Success,
                    "Valid location",
                    Duration::milliseconds(3000),
                );
                self.set_phase(ResolverPhase::Suggesting);
                SearchOutcome::Suggestions(candidates)
            }
            Err(e) => {
                error!("Error fetching search results: {}", e);
                self.notifier.notify(
                    NotificationKind::Error,
                    "Error fetching location",
                    Duration::milliseconds(4000),
                );
                self.set_phase(ResolverPhase::Idle);
                SearchOutcome::Suggestions(Vec::new())
            }
        }
    }

    /// Pure projection of an already-validated candidate; no network call,
    /// no failure path. `accuracy` is absent for text-derived records.
    pub fn resolve_selection(&self, candidate: Candidate) -> LocationRecord {
        let record = LocationRecord::from(candidate);

        self.notifier.notify(
            NotificationKind::Success,
            &format!("Location selected: {}", record.display_name),
            Duration::milliseconds(3000),
        );
        self.set_phase(ResolverPhase::Idle);

        record
    }

    pub async fn resolve_current_position(&self) -> Result<LocationRecord, ResolveError> {
        self.set_phase(ResolverPhase::AwaitingFix);

        let fix = match self.request_device_fix().await {
            Ok(fix) => fix,
            Err(e) => {
                self.set_phase(ResolverPhase::Idle);
                return Err(e);
            }
        };

        self.set_phase(ResolverPhase::AwaitingReverseLookup);

        let place = match self.client.reverse(fix.latitude, fix.longitude).await {
            Ok(place) => place,
            Err(e) => {
                error!("Error fetching current location details: {}", e);
                self.notifier.notify(
                    NotificationKind::Error,
                    "Unable to fetch location details",
                    Duration::milliseconds(4000),
                );
                self.set_phase(ResolverPhase::Idle);
                return Err(ResolveError::ReverseLookupFailed);
            }
        };

        let Some(display_name) = place.usable_display_name().map(str::to_string) else {
            self.notifier.notify(
                NotificationKind::Error,
                "Unable to fetch location",
                Duration::milliseconds(5000),
            );
            self.set_phase(ResolverPhase::Idle);
            return Err(ResolveError::EmptyResult);
        };

        self.notifier.notify(
            NotificationKind::Success,
            "Current location detected",
            Duration::milliseconds(3000),
        );
        self.set_phase(ResolverPhase::Idle);

        Ok(LocationRecord {
            display_name,
            address: place.address,
            latitude: fix.latitude,
            longitude: fix.longitude,
            place_type: place.place_type,
            place_class: place.place_class,
            importance: place.importance,
            accuracy: Some(fix.accuracy),
        })
    }

    async fn request_device_fix(&self) -> Result<DeviceFix, ResolveError> {
        let deadline = StdDuration::from_millis(DEVICE_FIX_OPTIONS.timeout_ms);
        let attempt =
            tokio::time::timeout(deadline, self.positions.current_position(DEVICE_FIX_OPTIONS))
                .await;

        match attempt {
            Ok(Ok(fix)) => Ok(fix),
            Ok(Err(PositionError::Unsupported)) => {
                self.notifier.notify(
                    NotificationKind::Error,
                    "Geolocation not supported",
                    Duration::milliseconds(4000),
                );
                Err(ResolveError::CapabilityUnavailable)
            }
            Ok(Err(PositionError::Unavailable(reason))) => {
                error!("Geolocation error: {}", reason);
                self.notifier.notify(
                    NotificationKind::Error,
                    "Unable to retrieve your location",
                    Duration::milliseconds(4000),
                );
                Err(ResolveError::PositionUnavailable)
            }
            Err(_elapsed) => {
                error!("Geolocation fix timed out after {:?}", deadline);
                self.notifier.notify(
                    NotificationKind::Error,
                    "Unable to retrieve your location",
                    Duration::milliseconds(4000),
                );
                Err(ResolveError::PositionUnavailable)
            }
        }
    }
}
