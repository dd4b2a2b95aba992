//! In-memory state for the Studio plugin command relay.
//!
//! Four identity-keyed stores bridge a web chat session to a
//! periodically-polling Roblox Studio plugin: bearer tokens, pending
//! command queues, last-seen liveness, and mirrored scene snapshots.
//! Everything is process-lifetime only; a restart drops all of it.

pub mod liveness;
pub mod queue;
pub mod scene;
pub mod tokens;

pub use liveness::{LivenessStatus, LivenessTracker, FRESHNESS_WINDOW_MS};
pub use queue::CommandQueues;
pub use scene::SceneMirror;
pub use tokens::TokenRegistry;

/// Shared relay state, cloned into every handler.
///
/// The stores are keyed independently per user identity; no operation
/// touches more than one store, and no lock is held across an await.
#[derive(Clone, Default)]
pub struct RelayState {
    /// Bearer tokens issued to plugin sessions.
    pub tokens: TokenRegistry,
    /// Pending asset commands awaiting the next poll, per user.
    pub queues: CommandQueues,
    /// Last-seen timestamps from polls and heartbeats.
    pub liveness: LivenessTracker,
    /// Last object-tree snapshot pushed by each user's plugin.
    pub scenes: SceneMirror,
}

impl RelayState {
    pub fn new() -> Self {
        Self::default()
    }
}
