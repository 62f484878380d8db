use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

// Expired toasts are pruned lazily; cap how many we keep in the meantime.
const MAX_RETAINED: usize = 32;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// An ephemeral, auto-dismissing user-visible message. `duration_ms` is how
/// long the toast stays visible after being raised.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub raised_at: DateTime<Utc>,
    pub duration_ms: i64,
}

/// Capability for raising transient user-visible messages. Passed explicitly
/// into the resolver rather than reached through ambient global state.
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NotificationKind, message: &str, duration: Duration);
}

/// Notifier backing the `/notifications` route: logs every toast through
/// `tracing` and retains a bounded window of recent ones.
#[derive(Default)]
pub struct ToastNotifier {
    toasts: Mutex<VecDeque<Notification>>,
}

impl ToastNotifier {
    pub fn new() -> Self {
        ToastNotifier {
            toasts: Mutex::new(VecDeque::new()),
        }
    }

    /// Toasts whose display duration has not yet elapsed.
    pub fn active(&self) -> Vec<Notification> {
        let now = Utc::now();
        self.toasts
            .lock()
            .expect("toast list lock poisoned")
            .iter()
            .filter(|n| n.raised_at + Duration::milliseconds(n.duration_ms) > now)
            .cloned()
            .collect()
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, kind: NotificationKind, message: &str, duration: Duration) {
        match kind {
            NotificationKind::Success => info!("toast: {}", message),
            NotificationKind::Error => warn!("toast: {}", message),
        }

        let mut toasts = self.toasts.lock().expect("toast list lock poisoned");
        toasts.push_back(Notification {
            kind,
            message: message.to_string(),
            raised_at: Utc::now(),
            duration_ms: duration.num_milliseconds(),
        });
        while toasts.len() > MAX_RETAINED {
            toasts.pop_front();
        }
    }
}
