use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use dashmap::DashMap;

/// How stale a last-seen timestamp may be before a plugin reports
/// disconnected. Sized to tolerate one missed cycle of a sub-5s poll
/// interval without the status flapping.
pub const FRESHNESS_WINDOW_MS: u64 = 5000;

/// Connection status derived from a last-seen timestamp at read time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LivenessStatus {
    pub connected: bool,
    /// Epoch millis of the last poll or heartbeat; 0 if never seen.
    pub last_seen: u64,
}

/// Per-user last-seen timestamps for the polling plugin.
///
/// There is no background sweep: staleness is computed on every read,
/// and a silent plugin simply reports disconnected until its next
/// touch. Records are never deleted.
#[derive(Clone, Default)]
pub struct LivenessTracker {
    last_seen: Arc<DashMap<String, u64>>,
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

impl LivenessTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record "now" as the last time `user`'s plugin was heard from.
    ///
    /// Both polls and explicit heartbeats land here — polling counts as
    /// proof of life, so an actively-draining plugin never needs a
    /// separate heartbeat.
    pub fn touch(&self, user: &str) {
        self.last_seen.insert(user.to_string(), now_ms());
    }

    /// Report whether `user`'s plugin is currently considered connected.
    ///
    /// An identity that has never been touched reports disconnected with
    /// a zero timestamp (a sentinel, not an error).
    pub fn status(&self, user: &str) -> LivenessStatus {
        self.status_at(user, now_ms())
    }

    fn status_at(&self, user: &str, now: u64) -> LivenessStatus {
        match self.last_seen.get(user) {
            Some(entry) => {
                let last_seen = *entry.value();
                LivenessStatus {
                    connected: now.saturating_sub(last_seen) <= FRESHNESS_WINDOW_MS,
                    last_seen,
                }
            }
            None => LivenessStatus {
                connected: false,
                last_seen: 0,
            },
        }
    }
}
