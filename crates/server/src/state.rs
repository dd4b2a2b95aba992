// crates/server/src/state.rs
//! Application state for the Axum server.

use std::sync::Arc;
use std::time::Instant;

use studiobridge_core::AssetGenerator;
use studiobridge_relay::RelayState;

/// Shared application state accessible from all route handlers.
///
/// The relay stores outlive any single request and are shared across
/// all concurrent requests; everything else in request handling is
/// stateless with respect to them.
pub struct AppState {
    /// Server start time for uptime tracking.
    pub start_time: Instant,
    /// The four identity-keyed relay stores.
    pub relay: RelayState,
    /// Asset-generation collaborator, injected at startup.
    pub generator: Arc<dyn AssetGenerator>,
}

impl AppState {
    /// Create a new application state wrapped in an Arc for sharing.
    pub fn new(generator: Arc<dyn AssetGenerator>) -> Arc<Self> {
        Arc::new(Self {
            start_time: Instant::now(),
            relay: RelayState::new(),
            generator,
        })
    }

    /// Get the server uptime in seconds.
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
